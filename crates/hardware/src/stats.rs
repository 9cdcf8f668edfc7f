//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Throughput:** Instructions executed and host time elapsed.
//! 2. **Instruction mix:** Counts by category (ALU, stack, branch, output).
//! 3. **Branches:** Taken and not-taken conditional jumps.

use std::time::Instant;

/// Simulation statistics for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Instructions executed, `HLT` included.
    pub steps: u64,
    /// ALU-class instructions executed.
    pub alu_ops: u64,
    /// Stack instructions executed (`PUSH`, `POP`, `CALL`, `RET`).
    pub stack_ops: u64,
    /// Jumps, calls, and returns that changed PC.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
    /// Values printed by `PRN`.
    pub prints: u64,
    /// Words with no handler that were stepped over.
    pub unknown_ops: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            alu_ops: 0,
            stack_ops: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            prints: 0,
            unknown_ops: 0,
        }
    }
}

impl SimStats {
    /// Prints a summary to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let branches = self.branches_taken + self.branches_not_taken;

        println!("\n==========================================================");
        println!("LS-8 SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.steps);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {}", self.alu_ops);
        println!("  op.stack               {}", self.stack_ops);
        println!("  op.branch              {branches}");
        println!("  op.print               {}", self.prints);
        println!("  op.unknown             {}", self.unknown_ops);
        println!("----------------------------------------------------------");
        println!("BRANCHES");
        println!("  branch.taken           {}", self.branches_taken);
        println!("  branch.not_taken       {}", self.branches_not_taken);
        println!("==========================================================");
    }
}
