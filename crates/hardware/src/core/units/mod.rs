//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU. Stack, branch, and I/O
//! instructions are carried out by the CPU's own handlers.

/// Arithmetic Logic Unit for byte operations.
pub mod alu;
