//! Simulator: drives the CPU run loop.
//!
//! Adds what a bare [`Cpu::run`] lacks: a cooperative stop flag polled
//! between instructions, a hook that receives the CPU when a stop is
//! honored, and an optional step budget.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::common::error::{ExecutionError, LoadError};
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::soc::Console;

/// Why a run ended without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// `HLT` executed.
    Halted,
    /// The stop flag was raised; the stop hook has run.
    Stopped,
    /// The configured step budget ran out.
    StepLimit,
}

/// Callback invoked with the CPU when a stop request is honored.
pub type StopHook = Box<dyn FnMut(&Cpu) + Send>;

/// Top-level simulator: CPU plus run control.
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    stop: Arc<AtomicBool>,
    max_steps: Option<u64>,
    on_stop: StopHook,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("stop", &self.stop.load(Ordering::Relaxed))
            .field("max_steps", &self.max_steps)
            .finish_non_exhaustive()
    }
}

/// Default stop hook: log the trace line and print it to stderr.
fn report_trace(cpu: &Cpu) {
    let line = cpu.trace_line();
    warn!(trace = %line, "run stopped");
    eprintln!("{line}");
}

impl Simulator {
    /// Creates a simulator whose CPU is built from `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_cpu(Cpu::new(config), config)
    }

    /// Creates a simulator whose CPU prints to `console`.
    pub fn with_console(config: &Config, console: Box<dyn Console>) -> Self {
        Self::with_cpu(Cpu::with_console(config, console), config)
    }

    /// Wraps an existing CPU.
    pub fn with_cpu(cpu: Cpu, config: &Config) -> Self {
        Self {
            cpu,
            stop: Arc::new(AtomicBool::new(false)),
            max_steps: config.general.max_steps,
            on_stop: Box::new(report_trace),
        }
    }

    /// Loads a program image into memory and resets the CPU.
    ///
    /// # Errors
    ///
    /// [`LoadError::TooLarge`] when the image does not fit in memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.cpu.load_image(image)
    }

    /// Shared handle to the stop flag.
    ///
    /// Storing `true` asks the run loop to stop before its next instruction;
    /// the flag is cleared once the stop is honored.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Raises the stop flag.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Replaces the hook run when a stop request is honored.
    pub fn set_stop_hook(&mut self, hook: impl FnMut(&Cpu) + Send + 'static) {
        self.on_stop = Box::new(hook);
    }

    /// Sets or clears the step budget.
    pub const fn set_max_steps(&mut self, max_steps: Option<u64>) {
        self.max_steps = max_steps;
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// The fault raised by the instruction, tagged with its PC.
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        self.cpu.step()
    }

    /// Runs until `HLT`, a stop request, the step budget, or a fault.
    ///
    /// # Errors
    ///
    /// The first fault raised, tagged with its PC. The CPU is left halted
    /// with its state intact for inspection, and running it again returns
    /// the same error.
    pub fn run(&mut self) -> Result<RunOutcome, ExecutionError> {
        let mut executed: u64 = 0;

        loop {
            if self.stop.swap(false, Ordering::SeqCst) {
                (self.on_stop)(&self.cpu);
                return Ok(RunOutcome::Stopped);
            }

            if self.max_steps.is_some_and(|limit| executed >= limit) {
                warn!(steps = executed, pc = self.cpu.pc, "step limit reached");
                return Ok(RunOutcome::StepLimit);
            }

            if self.cpu.step()? == StepOutcome::Halted {
                info!(steps = self.cpu.stats.steps, "run complete");
                return Ok(RunOutcome::Halted);
            }
            executed += 1;
        }
    }
}
