//! Simulation utilities and program loading.
//!
//! Provides the loader that turns program text into a memory image and the
//! simulator that drives a run to completion.

/// Program text parsing and file loading.
pub mod loader;

/// Run loop with stop control and step budget.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator, StopHook};
