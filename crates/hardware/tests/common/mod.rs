//! Shared test infrastructure.


/// Simulator harness with a captured console.
pub mod harness;
