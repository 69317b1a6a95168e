//! Common utilities and types used throughout the Y86 emulator.
//!
//! This module provides the building blocks shared by the loader and the
//! execution engine. It includes:
//! 1. **Numeric Codec:** Hex/decimal text parsing and little-endian word encoding.
//! 2. **Constants:** Architectural sizes and loader limits.
//! 3. **Memory Access:** Classification of memory operations (Fetch/Read/Write).
//! 4. **Error Handling:** Load errors, memory faults, and runtime faults.
//! 5. **Register Management:** The eight-entry register file.

/// Text and byte-order conversions.
pub mod codec;

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{REGISTER_COUNT, WORD_SIZE};
pub use data::AccessType;
pub use error::{CodecError, ConfigError, Fault, LoadError, MemoryFault, SimError};
pub use reg::{Register, RegisterFile};
