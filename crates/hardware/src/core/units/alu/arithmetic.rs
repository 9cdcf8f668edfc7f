//! ALU arithmetic operations.
//!
//! Implements byte-wide addition, subtraction, multiplication, and division.
//! Add, subtract, and multiply wrap modulo 256. Division is unsigned integer
//! division and rejects a zero divisor.

use crate::common::constants::WORD_MASK;
use crate::common::error::Fault;
use crate::isa::instruction::AluOp;
use crate::isa::opcodes;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - Value of the destination register.
/// * `b`  - Value of the source register.
///
/// # Returns
///
/// The byte to write back to the destination register.
///
/// # Errors
///
/// [`Fault::DivideByZero`] for `DIV` with `b == 0`, and
/// [`Fault::UnsupportedOperation`] if called with `CMP`.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, Fault> {
    let (a, b) = (u32::from(a), u32::from(b));
    let wide = match op {
        AluOp::Add => a + b,
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a * b,
        AluOp::Div => {
            if b == 0 {
                return Err(Fault::DivideByZero);
            }
            a / b
        }
        AluOp::Cmp => return Err(Fault::UnsupportedOperation(opcodes::ALU_CMP)),
    };
    Ok((wide & WORD_MASK) as u8)
}
