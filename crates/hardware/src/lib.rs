//! Y86 instruction-set emulator library.
//!
//! This crate implements a directive loader and a fetch/decode/execute engine for
//! the Y86 teaching ISA with the following:
//! 1. **Core:** Register file, condition flags, status machine and the execution step.
//! 2. **Memory:** A flat, zero-initialized, bounds-checked byte image.
//! 3. **ISA:** Opcode table, decoding, and a disassembler.
//! 4. **Devices:** The console behind READB/READL/WRITEB/WRITEL.
//! 5. **Simulation:** Lexer, directive parser, loader, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use y86_core::{Config, Simulator, StopReason, StreamConsole};
//! use y86_core::core::arch::Status;
//!
//! // irmovl $65, %eax; rmmovl %eax, 0x20(%ecx); writeb 0x20(%ecx); halt
//! let src = ".size 40\n.text 0 30f041000000400120000000d01f2000000010";
//! let mut sim = Simulator::from_source(src, &Config::default()).unwrap();
//! let mut console = StreamConsole::new(&b""[..], Vec::new());
//! assert_eq!(sim.run(&mut console).unwrap(), StopReason::Finished(Status::Halted));
//! assert_eq!(console.output(), b"A");
//! ```

/// Common types and constants (registers, access types, errors, codec).
pub mod common;
/// Run configuration (defaults, JSON loading).
pub mod config;
/// CPU core (architectural state, execution units, execution step).
pub mod core;
/// Instruction set (opcodes, decode, instruction, disassembler).
pub mod isa;
/// Program loading and the top-level simulator.
pub mod sim;
/// Memory image and console devices.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// CPU architectural state.
pub use crate::core::Cpu;
/// Loader entry points.
pub use crate::sim::{LoadedProgram, load_program, load_program_file};
/// Top-level simulator and its stop reasons.
pub use crate::sim::{Simulator, StopReason};
/// Memory image and console types.
pub use crate::soc::{Console, Memory, StreamConsole};
