//! Execution statistics collection and reporting.
//!
//! Tracks what a run actually did. It provides:
//! 1. **Retirement count:** Total instructions executed.
//! 2. **Instruction mix:** Counts by category (immediate loads, ALU, stack, I/O).
//! 3. **Host timing:** Wall-clock duration of the run.

use std::time::Instant;

/// Statistics for a single CPU run.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total instructions executed, `HLT` included.
    pub instructions_retired: u64,
    /// Count of `LDI` instructions retired.
    pub inst_load_imm: u64,
    /// Count of ALU instructions (`MUL`) retired.
    pub inst_alu: u64,
    /// Count of stack instructions (`PUSH`, `POP`) retired.
    pub inst_stack: u64,
    /// Count of I/O instructions (`PRN`) retired.
    pub inst_io: u64,
}

impl SimStats {
    /// Creates a zeroed statistics record starting the host clock now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_load_imm: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_io: 0,
        }
    }

    /// Prints a summary block to standard output.
    pub fn report(&self) {
        let elapsed = self.start_time.elapsed();
        println!();
        println!("=== Simulation Statistics ===");
        println!("Instructions retired: {}", self.instructions_retired);
        println!("  Immediate loads:    {}", self.inst_load_imm);
        println!("  ALU operations:     {}", self.inst_alu);
        println!("  Stack operations:   {}", self.inst_stack);
        println!("  I/O (PRN):          {}", self.inst_io);
        println!("Host time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}
