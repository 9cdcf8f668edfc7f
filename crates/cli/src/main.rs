//! LS-8 simulator CLI.
//!
//! This binary provides the command-line entry point. It performs:
//! 1. **Run:** Load a `.ls8` program and execute it until `HLT`, a fault, or Ctrl-C.
//! 2. **Disassemble:** Print a listing of a `.ls8` program without running it.
//!
//! Ctrl-C does not kill the process outright: it raises the simulator's stop
//! flag, and the run loop prints a trace line before exiting.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;
use ls8_core::sim::{RunOutcome, Simulator};
use ls8_core::soc::Memory;

/// Exit code after `HLT` or a completed listing.
const EXIT_SUCCESS: i32 = 0;
/// Exit code after a fault or a load error.
const EXIT_FAULT: i32 = 1;
/// Exit code when the step budget runs out.
const EXIT_STEP_LIMIT: i32 = 3;
/// Exit code after Ctrl-C (128 + SIGINT).
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit CPU simulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one 8-digit binary byte per line; '#' starts a comment.\n\nExamples:\n  ls8 run print8.ls8\n  ls8 run --trace --stats call.ls8\n  ls8 disasm stack.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run {
        /// Program file to execute.
        #[arg(default_value = "sctest.ls8")]
        file: PathBuf,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Print run statistics on exit.
        #[arg(long)]
        stats: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a listing of a program.
    Disasm {
        /// Program file to disassemble.
        file: PathBuf,
    },
}

/// Stop flag of the running simulator, reachable from the signal handler.
static STOP_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

extern "C" fn on_sigint(_signum: libc::c_int) {
    if let Some(flag) = STOP_FLAG.get() {
        flag.store(true, Ordering::SeqCst);
    }
}

/// Routes SIGINT to `flag` instead of terminating the process.
fn install_sigint(flag: Arc<AtomicBool>) {
    if STOP_FLAG.set(flag).is_err() {
        return;
    }
    let handler = on_sigint as extern "C" fn(libc::c_int);
    // SAFETY: the handler only performs an atomic load and an atomic store,
    // both async-signal-safe, and `STOP_FLAG` is initialized before it is installed.
    let _ = unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) };
}

fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("warn,ls8_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Run {
            file,
            trace,
            stats,
            max_steps,
            config,
        } => {
            init_logging(trace);
            cmd_run(&file, trace, stats, max_steps, config.as_deref())
        }
        Commands::Disasm { file } => {
            init_logging(false);
            cmd_disasm(&file)
        }
    };

    process::exit(code);
}

/// Loads `file` and runs it; returns the process exit code.
fn cmd_run(
    file: &Path,
    trace: bool,
    stats: bool,
    max_steps: Option<u64>,
    config_path: Option<&Path>,
) -> i32 {
    let mut config = match config_path.map(Config::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            error!(%e, "configuration rejected");
            eprintln!("[!] {e}");
            return EXIT_FAULT;
        }
    };
    config.general.trace_instructions |= trace;
    if max_steps.is_some() {
        config.general.max_steps = max_steps;
    }

    let image = match loader::load_program(file) {
        Ok(image) => image,
        Err(e) => {
            error!(%e, "program rejected");
            eprintln!("[!] {e}");
            return EXIT_FAULT;
        }
    };

    let mut sim = Simulator::new(&config);
    if let Err(e) = sim.load_image(&image) {
        eprintln!("[!] {e}");
        return EXIT_FAULT;
    }
    install_sigint(sim.stop_handle());

    let code = match sim.run() {
        Ok(RunOutcome::Halted) => EXIT_SUCCESS,
        Ok(RunOutcome::Stopped) => EXIT_INTERRUPTED,
        Ok(RunOutcome::StepLimit) => {
            eprintln!("\n[!] Step limit reached");
            sim.cpu.dump_state();
            EXIT_STEP_LIMIT
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            sim.cpu.dump_state();
            EXIT_FAULT
        }
    };

    if stats {
        sim.cpu.stats.print();
    }
    code
}

/// Prints a listing of `file`; returns the process exit code.
fn cmd_disasm(file: &Path) -> i32 {
    let image = match loader::load_program(file) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("[!] {e}");
            return EXIT_FAULT;
        }
    };

    let mut memory = Memory::new();
    if let Err(e) = memory.load_image(&image) {
        eprintln!("[!] {e}");
        return EXIT_FAULT;
    }

    for line in disasm::listing(&memory, image.len()) {
        let bytes: Vec<String> = line.bytes.iter().map(|b| format!("{b:02X}")).collect();
        println!("{:02X}: {:<9} {}", line.addr, bytes.join(" "), line.text);
    }
    EXIT_SUCCESS
}
