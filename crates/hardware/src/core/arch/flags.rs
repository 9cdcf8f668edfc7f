//! LS-8 Flags Register.
//!
//! This module implements the flags register written by `CMP` and read by
//! the conditional jumps. It performs the following:
//! 1. **Encoding:** One independent bit per comparison outcome (`L`, `G`, `E`).
//! 2. **Invariant Enforcement:** Exactly one outcome bit is set after a comparison.
//! 3. **Queries:** Named bit tests, so jumps never compare against a magic value.

use std::cmp::Ordering;
use std::fmt;

/// Comparison outcome bits, laid out as `00000LGE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Set when `a < b`.
    pub const LESS: u8 = 0b0000_0100;
    /// Set when `a > b`.
    pub const GREATER: u8 = 0b0000_0010;
    /// Set when `a == b`.
    pub const EQUAL: u8 = 0b0000_0001;

    const MASK: u8 = Self::LESS | Self::GREATER | Self::EQUAL;

    /// Flags with no bit set (the reset state).
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds flags from raw bits; anything outside `LGE` is dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Flags describing how `a` compares with `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::arch::flags::Flags;
    ///
    /// assert!(Flags::from_comparison(5, 10).is_set(Flags::LESS));
    /// assert!(Flags::from_comparison(10, 5).is_set(Flags::GREATER));
    /// assert_eq!(Flags::from_comparison(5, 5).bits(), Flags::EQUAL);
    /// ```
    pub const fn from_comparison(a: u8, b: u8) -> Self {
        Self::from_ordering(if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }

    /// Flags for a comparison outcome.
    pub const fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self(Self::LESS),
            Ordering::Greater => Self(Self::GREATER),
            Ordering::Equal => Self(Self::EQUAL),
        }
    }

    /// Whether every bit in `mask` is set.
    #[inline]
    pub const fn is_set(self, mask: u8) -> bool {
        self.0 & mask == mask
    }

    /// Shorthand for `is_set(Flags::EQUAL)`.
    #[inline]
    pub const fn equal(self) -> bool {
        self.is_set(Self::EQUAL)
    }

    /// Raw register contents.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Flags {
    /// Formats the flags as `LGE` letters, `-` for a clear bit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |mask, c| if self.is_set(mask) { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(Self::LESS, 'L'),
            bit(Self::GREATER, 'G'),
            bit(Self::EQUAL, 'E')
        )
    }
}
