//! Machine Components.
//!
//! This module organizes the components the CPU talks to: the memory image
//! and the console device behind the READx/WRITEx instructions.

/// Console device implementations.
pub mod devices;

/// Memory image.
pub mod memory;

/// Console trait definition.
pub mod traits;

pub use devices::StreamConsole;
pub use memory::Memory;
pub use traits::Console;
