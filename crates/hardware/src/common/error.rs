//! Fault and Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Fault Representation:** Every condition that stops a run (bad address, zero divisor, unknown ALU op, bad image).
//! 2. **Execution Errors:** A fault tagged with the PC of the instruction that raised it.
//! 3. **Load Errors:** Failures that surface while reading a program image, before the machine runs.

use std::io;

use thiserror::Error;

/// Fatal machine conditions.
///
/// None of these are recoverable: the run loop halts the machine and hands
/// the fault back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Memory access beyond address `0xFF`.
    ///
    /// The associated value is the faulting address.
    #[error("AddressOutOfBounds({addr:#x})")]
    AddressOutOfBounds {
        /// Address that was accessed.
        addr: usize,
    },

    /// `DIV` with a divisor register holding zero.
    #[error("DivideByZero")]
    DivideByZero,

    /// ALU-class instruction whose sub-opcode names no ALU operation.
    ///
    /// The associated value is the 5-bit sub-opcode.
    #[error("UnsupportedOperation({0:#04x})")]
    UnsupportedOperation(u8),

    /// A program image line that does not encode a byte.
    #[error("MalformedImage(line {line}: {reason})")]
    MalformedImage {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// A fault raised while executing the instruction at `pc`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{fault} at PC {pc:#04x}")]
pub struct ExecutionError {
    /// Address of the instruction that faulted.
    pub pc: usize,
    /// The condition that stopped the machine.
    #[source]
    pub fault: Fault,
}

impl ExecutionError {
    /// Tags `fault` with the PC it occurred at.
    pub const fn new(pc: usize, fault: Fault) -> Self {
        Self { pc, fault }
    }
}

/// Errors raised while turning a program file into a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line of the image is not an 8-digit binary byte.
    #[error(transparent)]
    Malformed(#[from] Fault),

    /// The image holds more bytes than memory.
    #[error("program is {len} bytes; memory holds {capacity}")]
    TooLarge {
        /// Number of bytes in the image.
        len: usize,
        /// Size of memory.
        capacity: usize,
    },
}
