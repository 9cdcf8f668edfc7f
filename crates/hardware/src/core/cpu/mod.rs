//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! whole machine state. It coordinates the following:
//! 1. **State Management:** Registers, flags, program counter, and the halt latch.
//! 2. **Memory:** The 256-byte RAM holding both program and stack.
//! 3. **Output:** The console that receives `PRN` values.
//! 4. **Observability:** Instruction tracing and run statistics.

/// Fetch-decode-execute cycle and instruction handlers.
pub mod execution;

/// Stack push/pop helpers.
pub mod stack;

/// Diagnostic trace line and state dumps.
pub mod trace;

use std::fmt;

use tracing::info;

use crate::common::RegisterFile;
use crate::common::constants::REGISTER_COUNT;
use crate::common::error::{ExecutionError, LoadError};
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::soc::{Console, Memory, NullConsole, StdoutConsole};
use crate::stats::SimStats;

pub use execution::StepOutcome;

/// Main CPU structure containing all machine state.
pub struct Cpu {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: RegisterFile,
    /// Program counter. Held wide so running off the end of memory is
    /// caught by the next fetch instead of wrapping.
    pub pc: usize,
    /// Flags register, written by `CMP`.
    pub flags: Flags,
    /// Main memory.
    pub memory: Memory,
    /// Set by `HLT` or a fatal fault; the machine executes nothing further.
    pub halted: bool,
    /// The fault that stopped the machine, if one did. Latched until reset.
    fault: Option<ExecutionError>,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
    /// Register `RET` pops the return address into.
    ret_latch: u8,
    console: Box<dyn Console>,
    start_pc: u8,
    initial_sp: u8,
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("regs", &self.regs)
            .field("flags", &self.flags)
            .field("halted", &self.halted)
            .field("fault", &self.fault)
            .field("console", &self.console.name())
            .finish_non_exhaustive()
    }
}

impl Cpu {
    /// Creates a CPU from `config`.
    ///
    /// `PRN` output goes to stdout when `general.echo_output` is set and is
    /// discarded otherwise; use [`Cpu::with_console`] to capture it.
    pub fn new(config: &Config) -> Self {
        let console: Box<dyn Console> = if config.general.echo_output {
            Box::new(StdoutConsole)
        } else {
            Box::new(NullConsole)
        };
        Self::with_console(config, console)
    }

    /// Creates a CPU that sends `PRN` output to `console`.
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        let general = &config.general;
        Self {
            regs: RegisterFile::with_sp(general.initial_sp),
            pc: usize::from(general.start_pc),
            flags: Flags::empty(),
            memory: Memory::new(),
            halted: false,
            fault: None,
            trace: general.trace_instructions || cfg!(feature = "always-trace"),
            stats: SimStats::default(),
            ret_latch: 0,
            console,
            start_pc: general.start_pc,
            initial_sp: general.initial_sp,
        }
    }

    /// Replaces the console.
    pub fn set_console(&mut self, console: Box<dyn Console>) {
        self.console = console;
    }

    /// Copies a program image into memory and resets the machine.
    ///
    /// # Errors
    ///
    /// [`LoadError::TooLarge`] when the image does not fit in memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.memory.load_image(image)?;
        self.reset();
        info!(bytes = image.len(), "program image loaded");
        Ok(())
    }

    /// Returns registers, flags, PC, and statistics to their reset state and
    /// clears a latched fault.
    ///
    /// Memory is left as it is.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::with_sp(self.initial_sp);
        self.pc = usize::from(self.start_pc);
        self.flags = Flags::empty();
        self.halted = false;
        self.fault = None;
        self.ret_latch = 0;
        self.stats = SimStats::default();
    }

    /// Address of the next instruction.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Value of register `idx`.
    pub const fn reg(&self, idx: usize) -> u8 {
        self.regs.read(idx)
    }

    /// All eight registers, `R0` first.
    pub const fn registers(&self) -> [u8; REGISTER_COUNT] {
        self.regs.snapshot()
    }

    /// Current flags.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Main memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Whether the machine has stopped, by `HLT` or by a fault.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// The fault that stopped the machine; `None` while running or after `HLT`.
    pub const fn fault(&self) -> Option<&ExecutionError> {
        self.fault.as_ref()
    }

    /// Statistics for the current run.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}
