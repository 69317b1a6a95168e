//! Console trait for the I/O instructions.
//!
//! This module defines the `Console` trait implemented by every device that can
//! serve READB/READL/WRITEB/WRITEL. It provides:
//! 1. **Input:** One raw byte, or one decimal word with `scanf("%d")` semantics.
//! 2. **Output:** One raw byte, or one word rendered in decimal.
//!
//! Reads report exhaustion as `Ok(None)`; the engine turns that into ZF.

use std::io;

/// Character and word I/O used by the emulated program.
pub trait Console {
    /// Reads one byte. Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Reads one decimal integer, skipping leading whitespace.
    ///
    /// Returns `None` at end of input or if the next non-blank text is not a
    /// number; in the latter case the offending byte is left unread.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails.
    fn read_long(&mut self) -> io::Result<Option<i32>>;

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Writes a word in decimal.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn write_long(&mut self, value: i32) -> io::Result<()>;

    /// Flushes buffered output (default: no-op).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
