//! Y86 architectural state.
//!
//! This module contains the state elements that are neither registers nor
//! memory:
//! 1. **Flags:** The OF, ZF and SF condition codes.
//! 2. **Status:** The program-status state machine.

/// Condition code register.
pub mod flags;

/// Program status definitions.
pub mod status;

pub use flags::ConditionFlags;
pub use status::Status;
