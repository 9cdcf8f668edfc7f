//! LS-8 opcode table.
//!
//! Full instruction bytes as they appear in a program image, and the 5-bit
//! opcodes the decoder extracts from them (`word & 0b0001_1111`).
//!
//! Instruction byte layout: `AABCDDDD` where `AA` is the operand count,
//! `B` marks an ALU operation and `C` marks an instruction that sets PC
//! itself. The low five bits `CDDDD` are the opcode, so every opcode from
//! 16 up carries the sets-PC bit.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;
/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;
/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;
/// Print a register in decimal.
pub const PRN: u8 = 0b0100_0111;
/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;
/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;
/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;
/// Jump if the last comparison was equal.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if the last comparison was not equal.
pub const JNE: u8 = 0b0101_0110;

/// `R[a] = R[a] + R[b]`.
pub const ADD: u8 = 0b1010_0000;
/// `R[a] = R[a] - R[b]`.
pub const SUB: u8 = 0b1010_0001;
/// `R[a] = R[a] * R[b]`.
pub const MUL: u8 = 0b1010_0010;
/// `R[a] = R[a] / R[b]`.
pub const DIV: u8 = 0b1010_0011;
/// Compare `R[a]` with `R[b]` and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// 5-bit opcode of `HLT`.
pub const OP_HLT: u8 = 1;
/// 5-bit opcode of `LDI`.
pub const OP_LDI: u8 = 2;
/// 5-bit opcode of `PUSH`.
pub const OP_PUSH: u8 = 5;
/// 5-bit opcode of `POP`.
pub const OP_POP: u8 = 6;
/// 5-bit opcode of `PRN`.
pub const OP_PRN: u8 = 7;
/// 5-bit opcode of `CALL`.
pub const OP_CALL: u8 = 16;
/// 5-bit opcode of `RET`.
pub const OP_RET: u8 = 17;
/// 5-bit opcode of `JMP`.
pub const OP_JMP: u8 = 20;
/// 5-bit opcode of `JEQ`.
pub const OP_JEQ: u8 = 21;
/// 5-bit opcode of `JNE`.
pub const OP_JNE: u8 = 22;

/// ALU sub-opcode of `ADD`.
pub const ALU_ADD: u8 = 0;
/// ALU sub-opcode of `SUB`.
pub const ALU_SUB: u8 = 1;
/// ALU sub-opcode of `MUL`.
pub const ALU_MUL: u8 = 2;
/// ALU sub-opcode of `DIV`.
pub const ALU_DIV: u8 = 3;
/// ALU sub-opcode of `CMP`.
pub const ALU_CMP: u8 = 7;
