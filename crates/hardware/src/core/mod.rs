//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state, the execution
//! units, and the fetch-decode-execute loop that ties them together.

/// Architectural state (flags register).
pub mod arch;

/// CPU core implementation and instruction handlers.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, StepOutcome};
