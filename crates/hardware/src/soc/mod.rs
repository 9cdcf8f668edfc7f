//! System components around the CPU.
//!
//! This module organizes the parts of the machine that are not the core
//! itself: main memory and the console that receives program output.

/// Console implementations (stdout, buffer, null).
pub mod console;

/// Main memory (256 bytes).
pub mod ram;

/// Console trait definition.
pub mod traits;

pub use console::{BufferConsole, NullConsole, StdoutConsole};
pub use ram::Memory;
pub use traits::Console;
