//! Core processor implementation.
//!
//! This module contains the CPU state container, the fetch-decode-execute
//! engine, the condition flags, and the ALU.

/// Architectural state beyond the register file (condition flags).
pub mod arch;

/// CPU state and the execution engine.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunOutcome, State};
