//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the byte-wide ALU behind every ALU-class
//! instruction. It never touches the register file itself: it takes operand
//! values and reports what the CPU must write back.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`compare`]:    Cmp

/// Byte arithmetic (add, subtract, multiply, divide).
pub mod arithmetic;

/// Comparison producing flags.
pub mod compare;

use crate::common::error::Fault;
use crate::core::arch::flags::Flags;
use crate::isa::instruction::AluOp;

/// What an ALU operation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutcome {
    /// Byte to store in the destination register.
    Write(u8),
    /// New flags register contents; no register is written.
    Flags(Flags),
}

/// Arithmetic Logic Unit for byte operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - Value of register A (the destination for arithmetic).
    /// * `b`  - Value of register B.
    ///
    /// # Errors
    ///
    /// [`Fault::DivideByZero`] when `DIV` is given a zero divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::arch::flags::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOutcome};
    /// use ls8_core::isa::AluOp;
    ///
    /// // Wraps modulo 256
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFF, 1), Ok(AluOutcome::Write(0)));
    ///
    /// // Comparison yields flags instead of a value
    /// assert_eq!(
    ///     Alu::execute(AluOp::Cmp, 5, 5),
    ///     Ok(AluOutcome::Flags(Flags::from_bits(Flags::EQUAL)))
    /// );
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutcome, Fault> {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => {
                arithmetic::execute(op, a, b).map(AluOutcome::Write)
            }
            AluOp::Cmp => Ok(AluOutcome::Flags(compare::execute(a, b))),
        }
    }
}
