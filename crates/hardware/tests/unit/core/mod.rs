//! Processor core tests.


/// `CALL`, `RET`, and the jump instructions.
pub mod control_flow;
