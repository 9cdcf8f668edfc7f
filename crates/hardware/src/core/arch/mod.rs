//! LS-8 architectural state beyond the register file.
//!
//! The only such state is the flags register; PC and the halt latch live on
//! the [`Cpu`](crate::core::Cpu) itself.

/// Flags register (less-than, greater-than, equal bits).
pub mod flags;

pub use flags::Flags;
