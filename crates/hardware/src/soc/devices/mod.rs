//! I/O Devices.
//!
//! This module contains the console implementations that back the READB,
//! READL, WRITEB and WRITEL instructions.

/// Stream-backed console (stdin/stdout or in-memory buffers).
pub mod console;

pub use console::StreamConsole;
