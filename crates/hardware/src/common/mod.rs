//! Common utilities and types used throughout the LS-8 simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Memory size, register layout, and instruction-word masks.
//! 2. **Error Handling:** Fatal faults, PC-tagged execution errors, and load errors.
//! 3. **Register Management:** The byte-wide register file.

/// Machine-wide constants.
pub mod constants;

/// Fault, execution error, and load error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP, SP_INIT};
pub use error::{ExecutionError, Fault, LoadError};
pub use reg::RegisterFile;
