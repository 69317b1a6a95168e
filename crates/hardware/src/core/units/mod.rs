//! Execution units.
//!
//! This module contains the combinational pieces of the execute step: the
//! integer ALU with its condition-code outputs, and the branch resolution
//! unit that turns condition codes into jump decisions.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional jumps.
pub mod bru;
