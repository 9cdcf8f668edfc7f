//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the instruction-word field extractors, the
//! decoder, and the disassembler for the LS-8.

/// Instruction decoding (word, class bits, operand fetch).
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Instruction word bit extraction and the `Opcode`/`AluOp` enums.
pub mod instruction;

/// Instruction bytes and 5-bit opcodes.
pub mod opcodes;

pub use decode::{Decoded, decode};
pub use instruction::{AluOp, InstructionBits, Opcode};
