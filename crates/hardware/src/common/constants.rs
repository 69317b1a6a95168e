//! Global Emulator Constants.
//!
//! This module defines the architectural constants of the Y86 machine and the
//! limits applied by the loader. It includes:
//! 1. **Register Constants:** Register count and the "no register" encoding.
//! 2. **Word Constants:** Width of a machine word in memory.
//! 3. **Loader Constants:** Default bound on the memory image size.

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Width of a machine word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Smallest register nibble that encodes "no register".
///
/// Nibbles `0x8..=0xF` mean "no register"; IRMOVL requires one in its
/// source position.
pub const NO_REGISTER_MIN: u8 = 0x8;

/// Default host limit on the `.size` directive (16 MiB); see `memory.max_capacity`.
pub const DEFAULT_MAX_CAPACITY: u32 = 16 * 1024 * 1024;

/// Number of registers printed per line by [`RegisterFile::dump`](super::RegisterFile::dump).
pub const REGISTERS_PER_DUMP_LINE: usize = 4;
