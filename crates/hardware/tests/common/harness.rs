use std::path::{Path, PathBuf};

use ls8_core::Simulator;
use ls8_core::common::ExecutionError;
use ls8_core::config::Config;
use ls8_core::core::{Cpu, StepOutcome};
use ls8_core::sim::RunOutcome;
use ls8_core::sim::loader;
use ls8_core::soc::BufferConsole;

pub struct TestContext {
    pub sim: Simulator,
    pub console: BufferConsole,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let console = BufferConsole::new();
        let sim = Simulator::with_console(config, Box::new(console.clone()));
        Self { sim, console }
    }

    /// Load a program image at address 0 and reset the CPU.
    pub fn load(mut self, image: &[u8]) -> Self {
        self.sim.load_image(image).unwrap();
        self
    }

    /// Load one of the bundled `.ls8` programs.
    pub fn load_file(self, name: &str) -> Self {
        let image = loader::load_program(program_path(name)).unwrap();
        self.load(&image)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    pub fn set_reg(&mut self, reg: usize, val: u8) {
        self.sim.cpu.regs.write(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> u8 {
        self.sim.cpu.reg(reg)
    }

    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        self.sim.step()
    }

    /// Execute `n` instructions, panicking on a fault.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.step().unwrap();
        }
    }

    pub fn run(&mut self) -> Result<RunOutcome, ExecutionError> {
        self.sim.run()
    }

    /// Run to `HLT`, panicking on any other outcome.
    pub fn run_to_halt(&mut self) {
        assert_eq!(self.run(), Ok(RunOutcome::Halted));
    }

    /// Values printed so far.
    pub fn output(&self) -> Vec<u8> {
        self.console.values()
    }
}

/// Path of a bundled program under the workspace `programs/` directory.
pub fn program_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}
