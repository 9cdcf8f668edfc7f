//! Console trait for program output.
//!
//! `PRN` is the machine's only observable side effect. The CPU hands each
//! printed value to a [`Console`], so embedders choose where output goes:
//! stdout for the CLI, a shared buffer for tests, or nowhere.
//!
//! Implementors must be `Send` so a simulator can be moved to a worker thread.

/// Sink for values printed by the `PRN` instruction.
pub trait Console: Send {
    /// Short name for this console (e.g., `"stdout"`).
    fn name(&self) -> &str;

    /// Receives one printed register value.
    fn print(&mut self, value: u8);
}
