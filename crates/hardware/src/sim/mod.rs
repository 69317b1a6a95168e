//! Program loading and the top-level simulator.
//!
//! Provides the lexer, directive parser and loader that build a memory image
//! from program text, and the [`Simulator`] that runs it.

/// Tokenizer for program text.
pub mod lexer;

/// Typed directive records.
pub mod directive;

/// Memory image construction and entry point resolution.
pub mod loader;

/// CPU plus memory, with step and run loops.
pub mod simulator;

pub use loader::{LoadedProgram, load_program, load_program_file};
pub use simulator::{Simulator, StopReason};
