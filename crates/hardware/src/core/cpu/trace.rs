//! Diagnostic state dumps.
//!
//! The trace line is the debugging aid emitted when a run is stopped from
//! outside: PC, the three memory bytes starting at PC, then `R0`-`R7`, all
//! as two-digit uppercase hex.
//!
//! ```text
//! TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
//! ```

use std::fmt::Write as _;

use super::Cpu;
use crate::common::constants::TRACE_WINDOW;

impl Cpu {
    /// Renders the trace line for the current state.
    ///
    /// Bytes of the window that fall past the end of memory show as `--`.
    pub fn trace_line(&self) -> String {
        let mut line = format!("TRACE: {:02X} |", self.pc);
        for offset in 0..TRACE_WINDOW {
            match self.memory.read(self.pc + offset) {
                Ok(byte) => {
                    let _ = write!(line, " {byte:02X}");
                }
                Err(_) => line.push_str(" --"),
            }
        }
        line.push_str(" |");
        for val in self.regs.snapshot() {
            let _ = write!(line, " {val:02X}");
        }
        line
    }

    /// Dumps the trace line, flags, halt state, and any latched fault to stderr.
    pub fn dump_state(&self) {
        eprintln!("{}", self.trace_line());
        eprintln!(
            "FL: {} ({:#05b})  halted: {}",
            self.flags,
            self.flags.bits(),
            self.halted
        );
        if let Some(err) = self.fault() {
            eprintln!("FAULT: {err}");
        }
    }
}
