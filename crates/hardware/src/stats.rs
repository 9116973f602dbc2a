//! Execution statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Cycles:** Instructions executed (the LS-8 retires one instruction per cycle).
//! 2. **Instruction mix:** Counts by category (ALU, load, stack, control flow, I/O, other).
//! 3. **Reporting:** A plain-text summary for the CLI's `--stats` flag.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::instruction::Instruction;

/// Execution statistics for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Instructions executed, including the final `HLT`.
    pub cycles: u64,
    /// `ADD`, `SUB`, `MUL`, `DIV`, and `CMP`.
    pub inst_alu: u64,
    /// `LDI`.
    pub inst_load: u64,
    /// `PUSH` and `POP`.
    pub inst_stack: u64,
    /// `CALL`, `RET`, `JMP`, `JEQ`, and `JNE`.
    pub inst_control: u64,
    /// `PRN`.
    pub inst_io: u64,
    /// `NOP` and `HLT`.
    pub inst_other: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SimStats {
    /// Creates zeroed statistics with the wall clock started now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_control: 0,
            inst_io: 0,
            inst_other: 0,
        }
    }

    /// Counts one executed instruction.
    pub fn record(&mut self, inst: &Instruction) {
        self.cycles += 1;
        match inst {
            Instruction::Alu { .. } => self.inst_alu += 1,
            Instruction::Ldi { .. } => self.inst_load += 1,
            Instruction::Push { .. } | Instruction::Pop { .. } => self.inst_stack += 1,
            Instruction::Call { .. }
            | Instruction::Ret
            | Instruction::Jmp { .. }
            | Instruction::Jeq { .. }
            | Instruction::Jne { .. } => self.inst_control += 1,
            Instruction::Prn { .. } => self.inst_io += 1,
            Instruction::Nop | Instruction::Hlt => self.inst_other += 1,
        }
    }

    /// Renders a plain-text report.
    pub fn summary(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.cycles.max(1) as f64;
        let pct = |n: u64| 100.0 * n as f64 / total;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================");
        let _ = writeln!(out, "LS-8 EXECUTION STATISTICS");
        let _ = writeln!(out, "==========================================");
        let _ = writeln!(out, "host_seconds       {seconds:.4} s");
        let _ = writeln!(out, "sim_cycles         {}", self.cycles);
        let _ = writeln!(out, "------------------------------------------");
        for (name, count) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("stack", self.inst_stack),
            ("control", self.inst_control),
            ("io", self.inst_io),
            ("other", self.inst_other),
        ] {
            let _ = writeln!(out, "  {name:<16} {count:>8} ({:>5.1}%)", pct(count));
        }
        out
    }
}
