//! Core processor implementation.
//!
//! This module contains the Y86 CPU: its architectural state, the execution
//! units that compute results and branch decisions, and the fetch/decode/execute
//! loop that drives them.

/// Architectural state (condition flags, program status).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
