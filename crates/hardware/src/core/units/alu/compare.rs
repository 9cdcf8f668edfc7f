//! ALU comparison.
//!
//! `CMP` is the only operation that writes the flags register and the only
//! one that leaves both operand registers untouched.

use crate::core::arch::flags::Flags;

/// Compares `a` with `b` as unsigned bytes.
#[inline]
pub const fn execute(a: u8, b: u8) -> Flags {
    Flags::from_comparison(a, b)
}
