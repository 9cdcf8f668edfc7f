//! Instruction word fields and opcode enums.
//!
//! Provides bit extraction for the single-byte instruction word and the two
//! enums the dispatcher matches on: [`Opcode`] for named handlers and
//! [`AluOp`] for ALU-class instructions.

use std::fmt;

use crate::common::constants::{
    ALU_FLAG, OPCODE_MASK, OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_FLAG,
};
use crate::common::error::Fault;
use crate::isa::opcodes;

/// Trait for extracting instruction fields from an instruction word.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-4).
    fn opcode(&self) -> u8;

    /// Extracts the operand count (bits 6-7): how many bytes follow the word.
    fn operand_count(&self) -> usize;

    /// Whether bit 5 marks this as an ALU operation.
    fn is_alu(&self) -> bool;

    /// Whether bit 4 marks this as an instruction that sets PC itself.
    ///
    /// When set, the run loop does not advance PC after the handler runs.
    fn sets_pc(&self) -> bool;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn operand_count(&self) -> usize {
        ((self >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK) as usize
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_FLAG != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_FLAG != 0
    }
}

/// Instructions with a dedicated handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Halt the machine.
    Hlt,
    /// Load immediate.
    Ldi,
    /// Push register.
    Push,
    /// Pop register.
    Pop,
    /// Print register.
    Prn,
    /// Call subroutine.
    Call,
    /// Return from subroutine.
    Ret,
    /// Unconditional jump.
    Jmp,
    /// Jump if equal.
    Jeq,
    /// Jump if not equal.
    Jne,
}

impl Opcode {
    /// Maps a 5-bit opcode to its instruction, or `None` when no handler exists.
    pub const fn from_bits(op: u8) -> Option<Self> {
        match op {
            opcodes::OP_HLT => Some(Self::Hlt),
            opcodes::OP_LDI => Some(Self::Ldi),
            opcodes::OP_PUSH => Some(Self::Push),
            opcodes::OP_POP => Some(Self::Pop),
            opcodes::OP_PRN => Some(Self::Prn),
            opcodes::OP_CALL => Some(Self::Call),
            opcodes::OP_RET => Some(Self::Ret),
            opcodes::OP_JMP => Some(Self::Jmp),
            opcodes::OP_JEQ => Some(Self::Jeq),
            opcodes::OP_JNE => Some(Self::Jne),
            _ => None,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Operations carried out by the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Unsigned integer division.
    Div,
    /// Comparison; writes the flags only.
    Cmp,
}

impl AluOp {
    /// Maps an ALU sub-opcode to its operation.
    ///
    /// # Errors
    ///
    /// [`Fault::UnsupportedOperation`] when the sub-opcode names no ALU operation.
    pub const fn from_bits(op: u8) -> Result<Self, Fault> {
        match op {
            opcodes::ALU_ADD => Ok(Self::Add),
            opcodes::ALU_SUB => Ok(Self::Sub),
            opcodes::ALU_MUL => Ok(Self::Mul),
            opcodes::ALU_DIV => Ok(Self::Div),
            opcodes::ALU_CMP => Ok(Self::Cmp),
            other => Err(Fault::UnsupportedOperation(other)),
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Cmp => "CMP",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
