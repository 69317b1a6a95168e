//! Load Error and Fault definitions.
//!
//! This module defines the error classes of the emulator:
//! 1. **Load Errors:** Malformed or inconsistent program text. Fatal to loading.
//! 2. **Faults:** Runtime conditions that move the CPU into a terminal status.
//!    They are recorded on the CPU, never propagated as panics.
//! 3. **Host Errors:** I/O failures of the host streams while a program runs,
//!    and unreadable configuration files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;
use crate::core::arch::Status;

/// Failure to convert program text into a number or byte sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The text was empty (or only a `0x` prefix).
    #[error("empty number")]
    Empty,

    /// A character outside the accepted digit set.
    #[error("invalid digit '{ch}' at position {position}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Character offset inside the token.
        position: usize,
    },

    /// The value does not fit the target width.
    #[error("value out of range")]
    Overflow,

    /// A hex byte string with an unpaired trailing digit.
    #[error("odd number of hex digits ({len})")]
    OddLength {
        /// Number of digits in the string.
        len: usize,
    },
}

/// Errors raised while turning program text into a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("cannot read program '{}': {source}", .path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// No `.size` directive was found.
    #[error("no .size directive found; exactly one is required")]
    MissingSize,

    /// A second `.size` directive was found.
    #[error("line {line}: more than one .size directive")]
    DuplicateSize {
        /// Line of the second directive.
        line: usize,
    },

    /// No `.text` directive was found.
    #[error("no .text directive found; exactly one is required")]
    MissingText,

    /// A second `.text` directive was found.
    #[error("line {line}: more than one .text directive")]
    DuplicateText {
        /// Line of the second directive.
        line: usize,
    },

    /// A token starting with `.` that names no known directive.
    #[error("line {line}: invalid directive '{token}'")]
    UnknownDirective {
        /// The offending token.
        token: String,
        /// Line of the token.
        line: usize,
    },

    /// A token found where a directive was expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken {
        /// The offending token.
        token: String,
        /// Line of the token.
        line: usize,
    },

    /// A directive ended before all of its arguments were given.
    #[error("line {line}: {directive} is missing an argument")]
    MissingArgument {
        /// Name of the directive, including the leading dot.
        directive: &'static str,
        /// Line of the directive.
        line: usize,
    },

    /// `.string` was given an argument without quotes.
    #[error("line {line}: expected a quoted string, found '{token}'")]
    ExpectedString {
        /// The offending token.
        token: String,
        /// Line of the token.
        line: usize,
    },

    /// A quoted string was still open at the end of the text.
    #[error("line {line}: unterminated string")]
    UnterminatedString {
        /// Line where the string starts.
        line: usize,
    },

    /// A numeric argument could not be parsed.
    #[error("line {line}: invalid number '{token}': {source}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// Line of the token.
        line: usize,
        /// Why the conversion failed.
        #[source]
        source: CodecError,
    },

    /// `.size` asked for more memory than the configuration allows.
    ///
    /// The program format itself accepts any 32-bit capacity. The limit is a
    /// host allocation policy set by `memory.max_capacity` (16 MiB unless
    /// configured); raise it to `u32::MAX` to accept every size.
    #[error("memory size {requested:#x} exceeds the limit of {max:#x} bytes")]
    CapacityTooLarge {
        /// Capacity requested by `.size`.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },

    /// A directive would write outside the memory image.
    #[error(
        "line {line}: {directive} writes {len} byte(s) at {addr:#x}, outside memory of {capacity:#x} bytes"
    )]
    OutOfBounds {
        /// Name of the directive, including the leading dot.
        directive: &'static str,
        /// Line of the directive.
        line: usize,
        /// First address written.
        addr: u32,
        /// Number of bytes written.
        len: usize,
        /// Capacity of the memory image.
        capacity: u32,
    },
}

/// An access that does not fit inside the memory image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{access} of {width} byte(s) at {addr:#x} outside memory of {capacity:#x} bytes")]
pub struct MemoryFault {
    /// Effective address of the access. May be negative.
    pub addr: i64,
    /// Width of the access in bytes.
    pub width: u32,
    /// Capacity of the memory image.
    pub capacity: u32,
    /// Kind of access.
    pub access: AccessType,
}

/// A runtime fault that stops execution.
///
/// Each fault maps to one terminal [`Status`] through [`Fault::status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// An instruction fetch or data access left the memory image.
    #[error("pc {pc:#x}: {fault}")]
    Address {
        /// PC of the faulting instruction.
        pc: u32,
        /// The rejected access.
        #[source]
        fault: MemoryFault,
    },

    /// IRMOVL named a real register in its source position.
    #[error("pc {pc:#x}: irmovl source field {nibble:#x} names a register")]
    ImmediateSource {
        /// PC of the faulting instruction.
        pc: u32,
        /// The source nibble.
        nibble: u8,
    },

    /// The opcode byte is not part of the instruction set.
    #[error("pc {pc:#x}: invalid opcode {opcode:#04x}")]
    IllegalOpcode {
        /// PC of the faulting instruction.
        pc: u32,
        /// The opcode byte.
        opcode: u8,
    },

    /// A register nibble of `0x8..=0xF` where a register is required.
    #[error("pc {pc:#x}: invalid register nibble {nibble:#x}")]
    InvalidRegister {
        /// PC of the faulting instruction.
        pc: u32,
        /// The register nibble.
        nibble: u8,
    },
}

impl Fault {
    /// Returns the terminal status this fault produces.
    pub const fn status(&self) -> Status {
        match self {
            Self::Address { .. } | Self::ImmediateSource { .. } => Status::BadAddress,
            Self::IllegalOpcode { .. } | Self::InvalidRegister { .. } => Status::BadInstruction,
        }
    }

    /// Returns the PC of the faulting instruction.
    pub const fn pc(&self) -> u32 {
        match self {
            Self::Address { pc, .. }
            | Self::ImmediateSource { pc, .. }
            | Self::IllegalOpcode { pc, .. }
            | Self::InvalidRegister { pc, .. } => *pc,
        }
    }
}

/// Host-side failure while running a program.
#[derive(Debug, Error)]
pub enum SimError {
    /// Writing program output or flushing the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The JSON was malformed or had fields of the wrong type.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
