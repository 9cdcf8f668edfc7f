//! Console implementations.
//!
//! Provides the three sinks for `PRN` output:
//! 1. **`StdoutConsole`:** Prints each value in decimal on its own line.
//! 2. **`BufferConsole`:** Records values behind a shared handle for later inspection.
//! 3. **`NullConsole`:** Discards output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::soc::traits::Console;

/// Writes printed values to stdout, one decimal number per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn name(&self) -> &str {
        "stdout"
    }

    fn print(&mut self, value: u8) {
        let mut out = io::stdout().lock();
        // A closed stdout (e.g. `ls8 run | head -1`) must not take the machine down.
        let _ = writeln!(out, "{value}");
    }
}

/// Records printed values in memory.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// the other to the CPU.
///
/// ```
/// use ls8_core::soc::{BufferConsole, Console};
///
/// let console = BufferConsole::new();
/// let mut sink = console.clone();
/// sink.print(8);
/// assert_eq!(console.values(), vec![8]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    values: Arc<Mutex<Vec<u8>>>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far, oldest first.
    pub fn values(&self) -> Vec<u8> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Printed values rendered the way `StdoutConsole` would show them.
    pub fn transcript(&self) -> String {
        self.values()
            .iter()
            .map(|v| format!("{v}\n"))
            .collect()
    }
}

impl Console for BufferConsole {
    fn name(&self) -> &str {
        "buffer"
    }

    fn print(&mut self, value: u8) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }
}

/// Discards printed values.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullConsole;

impl Console for NullConsole {
    fn name(&self) -> &str {
        "null"
    }

    fn print(&mut self, _value: u8) {}
}
