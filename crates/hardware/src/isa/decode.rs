//! LS-8 Instruction Decoder.
//!
//! This module decodes the instruction word at PC into a [`Decoded`] record:
//! the 5-bit opcode, the operand count, the ALU and sets-PC class bits, and
//! the operand bytes that follow the word in memory.

use crate::common::constants::MAX_OPERANDS;
use crate::common::error::Fault;
use crate::isa::instruction::InstructionBits;
use crate::soc::Memory;

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Address the instruction word was fetched from.
    pub pc: usize,
    /// Raw instruction word.
    pub word: u8,
    /// 5-bit opcode (`word & 0b0001_1111`).
    pub opcode: u8,
    /// Number of operand bytes following the word (0-3).
    pub operand_count: usize,
    /// Bit 5: routed to the ALU.
    pub is_alu: bool,
    /// Bit 4: the handler sets PC itself.
    pub sets_pc: bool,
    /// Operand bytes; slots past `operand_count` are zero.
    pub operands: [u8; MAX_OPERANDS],
}

impl Decoded {
    /// First operand byte.
    #[inline]
    pub const fn a(&self) -> u8 {
        self.operands[0]
    }

    /// Second operand byte.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.operands[1]
    }

    /// Size of the instruction in bytes, word included.
    #[inline]
    pub const fn size(&self) -> usize {
        self.operand_count + 1
    }

    /// Address of the byte after this instruction's operands.
    #[inline]
    pub const fn next_pc(&self) -> usize {
        self.pc + self.size()
    }
}

/// Decodes the instruction at `pc`.
///
/// Only the operand bytes the word asks for are fetched, so a one-byte
/// instruction in the last memory cell decodes cleanly.
///
/// # Errors
///
/// [`Fault::AddressOutOfBounds`] when the word or one of its operands lies
/// past the end of memory.
///
/// # Examples
///
/// ```
/// use ls8_core::isa::decode::decode;
/// use ls8_core::isa::opcodes::LDI;
/// use ls8_core::soc::Memory;
///
/// let mut mem = Memory::new();
/// mem.load_image(&[LDI, 0, 8]).unwrap();
/// let d = decode(&mem, 0).unwrap();
/// assert_eq!(d.opcode, 2);
/// assert_eq!(d.operands, [0, 8]);
/// assert_eq!(d.next_pc(), 3);
/// ```
pub fn decode(memory: &Memory, pc: usize) -> Result<Decoded, Fault> {
    let word = memory.read(pc)?;
    let operand_count = word.operand_count();

    let mut operands = [0; MAX_OPERANDS];
    for (i, slot) in operands
        .iter_mut()
        .enumerate()
        .take(operand_count.min(MAX_OPERANDS))
    {
        *slot = memory.read(pc + 1 + i)?;
    }

    Ok(Decoded {
        pc,
        word,
        opcode: word.opcode(),
        operand_count,
        is_alu: word.is_alu(),
        sets_pc: word.sets_pc(),
        operands,
    })
}
