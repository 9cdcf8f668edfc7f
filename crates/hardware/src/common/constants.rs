//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Size of the flat byte-addressed RAM.
//! 2. **Register Constants:** Register count, stack pointer index, and reset value.
//! 3. **Instruction Constants:** Masks and shifts for the fields of an instruction word.
//! 4. **Debug Constants:** Width of the memory window shown in a trace line.

/// Number of addressable bytes in main memory (addresses `0x00`-`0xFF`).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Mask applied to register operands; register indices are 3 bits wide.
pub const REGISTER_INDEX_MASK: u8 = 0b0000_0111;

/// Register index reserved as the stack pointer.
pub const SP: usize = 7;

/// Reset value of the stack pointer. The stack grows down from here.
pub const SP_INIT: u8 = 0xF4;

/// Mask that reduces a wide arithmetic result to one byte.
pub const WORD_MASK: u32 = 0xFF;

/// Mask for the 5-bit opcode field (bits 0-4).
pub const OPCODE_MASK: u8 = 0b0001_1111;

/// Bit marking an ALU-class instruction (bit 5).
pub const ALU_FLAG: u8 = 0b0010_0000;

/// Bit marking an instruction whose handler sets PC itself (bit 4).
pub const SETS_PC_FLAG: u8 = 0b0001_0000;

/// Shift for the operand-count field (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u32 = 6;

/// Mask for the operand-count field after shifting.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Maximum number of operand bytes carried in the decoded operand tuple.
pub const MAX_OPERANDS: usize = 2;

/// Number of memory bytes, starting at PC, shown in a trace line.
pub const TRACE_WINDOW: usize = 3;

/// Number of binary digits that encode one byte in a program image.
pub const IMAGE_WORD_BITS: usize = 8;

/// Character that starts a comment in a program image.
pub const IMAGE_COMMENT: char = '#';
