//! Memory Image.
//!
//! This module implements the flat, byte-addressable memory of the Y86 machine.
//! It provides:
//! 1. **Storage:** A zero-initialized buffer whose capacity is fixed at creation.
//! 2. **Bound Checking:** Every access is validated as a whole range before any
//!    byte is read or written, so a rejected store leaves memory untouched.
//! 3. **Word Access:** Little-endian 32-bit loads and stores.
//! 4. **Observability:** The hex dump printed by the driver after a run.

use std::ops::Range;

use crate::common::codec::{decode_word, encode_word};
use crate::common::{AccessType, MemoryFault, WORD_SIZE};

/// The memory image of one emulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory image of `capacity` bytes.
    pub fn new(capacity: u32) -> Self {
        Self {
            bytes: vec![0; capacity as usize],
        }
    }

    /// Returns the capacity in bytes.
    #[inline]
    pub const fn capacity(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// Returns the whole image.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Validates an access of `width` bytes at `addr`.
    ///
    /// Succeeds only if `0 <= addr` and `addr + width <= capacity`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] describing the rejected access.
    pub fn check(&self, addr: i64, width: u32, access: AccessType) -> Result<Range<usize>, MemoryFault> {
        let fault = MemoryFault {
            addr,
            width,
            capacity: self.capacity(),
            access,
        };
        let start = usize::try_from(addr).map_err(|_| fault)?;
        let end = start.checked_add(width as usize).ok_or(fault)?;
        if end > self.bytes.len() {
            return Err(fault);
        }
        Ok(start..end)
    }

    /// Returns `width` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if the range leaves the image.
    pub fn read_bytes(&self, addr: i64, width: u32, access: AccessType) -> Result<&[u8], MemoryFault> {
        let range = self.check(addr, width, access)?;
        Ok(&self.bytes[range])
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if `addr` is outside the image.
    pub fn read_u8(&self, addr: i64) -> Result<u8, MemoryFault> {
        let range = self.check(addr, 1, AccessType::Read)?;
        Ok(self.bytes[range.start])
    }

    /// Reads a little-endian word.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if any of the four bytes is outside the image.
    pub fn read_word(&self, addr: i64) -> Result<i32, MemoryFault> {
        let range = self.check(addr, WORD_SIZE, AccessType::Read)?;
        let b = &self.bytes[range];
        Ok(decode_word([b[0], b[1], b[2], b[3]]))
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if `addr` is outside the image.
    pub fn write_u8(&mut self, addr: i64, val: u8) -> Result<(), MemoryFault> {
        let range = self.check(addr, 1, AccessType::Write)?;
        self.bytes[range.start] = val;
        Ok(())
    }

    /// Writes a little-endian word. Nothing is written if the range is rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if any of the four bytes is outside the image.
    pub fn write_word(&mut self, addr: i64, val: i32) -> Result<(), MemoryFault> {
        self.write_bytes(addr, &encode_word(val))
    }

    /// Writes a byte slice. Nothing is written if the range is rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if the slice does not fit at `addr`.
    pub fn write_bytes(&mut self, addr: i64, data: &[u8]) -> Result<(), MemoryFault> {
        let width = u32::try_from(data.len()).unwrap_or(u32::MAX);
        let range = self.check(addr, width, AccessType::Write)?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }

    /// Formats the image as space-separated lowercase hex bytes without
    /// padding (`"30 f0 0 a"`), the layout of the driver's final dump.
    pub fn dump_hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{b:x}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
