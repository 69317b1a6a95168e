//! Condition Codes.
//!
//! The three condition codes written by the arithmetic and compare
//! instructions and read by the conditional jumps.

use std::fmt;

/// The OF, ZF and SF condition codes.
///
/// All flags are clear at reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConditionFlags {
    /// Signed overflow.
    pub of: bool,
    /// Zero result.
    pub zf: bool,
    /// Negative result.
    pub sf: bool,
}

impl ConditionFlags {
    /// Creates flags from explicit values.
    pub const fn new(of: bool, zf: bool, sf: bool) -> Self {
        Self { of, zf, sf }
    }

    /// Derives ZF and SF from a result and takes OF as given.
    #[inline]
    pub const fn from_result(value: i32, overflow: bool) -> Self {
        Self {
            of: overflow,
            zf: value == 0,
            sf: value < 0,
        }
    }

    /// Returns `SF ^ OF`, the "signed less than" predicate.
    #[inline]
    pub const fn less(self) -> bool {
        self.sf ^ self.of
    }
}

impl fmt::Display for ConditionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OF={} ZF={} SF={}",
            u8::from(self.of),
            u8::from(self.zf),
            u8::from(self.sf)
        )
    }
}
