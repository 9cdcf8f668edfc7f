//! Instruction Disassembler for the LS-8.
//!
//! Converts decoded instructions into mnemonic text for debug tracing, the
//! CLI `disasm` command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::decode::decode;
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::isa::opcodes::LDI;
//! use ls8_core::soc::Memory;
//!
//! let mut mem = Memory::new();
//! mem.load_image(&[LDI, 0, 8]).unwrap();
//! assert_eq!(disassemble(&decode(&mem, 0).unwrap()), "LDI R0,8");
//! ```

use crate::common::constants::REGISTER_INDEX_MASK;
use crate::isa::decode::{Decoded, decode};
use crate::isa::instruction::{AluOp, Opcode};
use crate::soc::Memory;

/// One line of a program listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the instruction word.
    pub addr: usize,
    /// Instruction word followed by its operand bytes.
    pub bytes: Vec<u8>,
    /// Mnemonic text.
    pub text: String,
}

#[inline]
const fn reg(operand: u8) -> u8 {
    operand & REGISTER_INDEX_MASK
}

/// Renders a raw byte that decodes to no instruction.
fn data_byte(word: u8) -> String {
    format!(".byte {word:#04x}")
}

/// Returns the mnemonic text for a decoded instruction.
pub fn disassemble(d: &Decoded) -> String {
    if d.is_alu {
        return match AluOp::from_bits(d.opcode) {
            Ok(op) => format!("{op} R{},R{}", reg(d.a()), reg(d.b())),
            Err(_) => data_byte(d.word),
        };
    }

    match Opcode::from_bits(d.opcode) {
        Some(op @ (Opcode::Hlt | Opcode::Ret)) => op.to_string(),
        Some(Opcode::Ldi) => format!("LDI R{},{}", reg(d.a()), d.b()),
        Some(
            op @ (Opcode::Push
            | Opcode::Pop
            | Opcode::Prn
            | Opcode::Call
            | Opcode::Jmp
            | Opcode::Jeq
            | Opcode::Jne),
        ) => format!("{op} R{}", reg(d.a())),
        None => data_byte(d.word),
    }
}

/// Walks the first `len` bytes of memory as a straight-line instruction stream.
///
/// An instruction whose operands run past the end of memory is listed as a
/// data byte.
pub fn listing(memory: &Memory, len: usize) -> Vec<ListingLine> {
    let end = len.min(memory.len());
    let bytes = memory.as_slice();
    let mut lines = Vec::new();
    let mut addr = 0;

    while addr < end {
        match decode(memory, addr) {
            Ok(d) => {
                let stop = d.next_pc().min(end);
                lines.push(ListingLine {
                    addr,
                    bytes: bytes[addr..stop].to_vec(),
                    text: disassemble(&d),
                });
                addr = d.next_pc();
            }
            Err(_) => {
                lines.push(ListingLine {
                    addr,
                    bytes: vec![bytes[addr]],
                    text: data_byte(bytes[addr]),
                });
                addr += 1;
            }
        }
    }

    lines
}
