//! LS-8 simulator library.
//!
//! This crate implements a simulator for the LS-8, an 8-bit stack-machine CPU, with the following:
//! 1. **Core:** Register file, flags, ALU, and the fetch-decode-execute loop.
//! 2. **Memory:** A flat, bounds-checked 256-byte RAM holding program and stack.
//! 3. **ISA:** Opcode table, decoding, and disassembly.
//! 4. **Simulation:** Program loader, run loop with stop control, configuration, and statistics.
//!
//! # Examples
//!
//! ```
//! use ls8_core::sim::RunOutcome;
//! use ls8_core::soc::BufferConsole;
//! use ls8_core::{Config, Simulator};
//!
//! let console = BufferConsole::new();
//! let mut sim = Simulator::with_console(&Config::default(), Box::new(console.clone()));
//! // LDI R0,8; PRN R0; HLT
//! sim.load_image(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
//! assert_eq!(sim.run(), Ok(RunOutcome::Halted));
//! assert_eq!(console.values(), vec![8]);
//! ```

/// Common types and constants (registers, faults, machine constants).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (flags, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and run loop.
pub mod sim;
/// Memory and console.
pub mod soc;
/// Run statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, memory, and stats.
pub use crate::core::Cpu;
/// Run driver around a `Cpu`.
pub use crate::sim::Simulator;
