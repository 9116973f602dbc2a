//! Simulator: owns a configured CPU and the run-time policy around it.
//!
//! The CPU knows how to execute; the simulator adds what a host needs on top:
//! loading from a file, a cycle limit for programs that never halt, and
//! logging of how the run ended.

use std::io::{self, Write};
use std::path::Path;

use crate::common::error::{CpuError, Fault};
use crate::config::Config;
use crate::core::cpu::{Cpu, RunOutcome, State};
use crate::sim::loader::{self, LoadError};

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<O = io::Stdout> {
    /// CPU architectural state (memory, registers, flags, stats).
    pub cpu: Cpu<O>,
    max_cycles: Option<u64>,
}

impl Simulator<io::Stdout> {
    /// Creates a simulator that prints to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<O: Write> Simulator<O> {
    /// Creates a simulator that prints to `output`.
    pub fn with_output(config: &Config, output: O) -> Self {
        Self {
            cpu: Cpu::with_output(config, output),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Loads a program image at address 0.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidAddress` if the image does not fit in memory.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.cpu.load(program)
    }

    /// Reads, parses, and loads the program at `path`.
    ///
    /// # Errors
    ///
    /// Returns any `LoadError` from reading, parsing, or placing the image.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let image = loader::load_program(path)?;
        self.cpu.load(&image)?;
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the `Fault` raised by the instruction.
    pub fn step(&mut self) -> Result<State, Fault> {
        self.cpu.step()
    }

    /// Runs until `HLT` or the configured cycle limit.
    ///
    /// # Errors
    ///
    /// Returns the first `Fault` raised; nothing after it is executed.
    pub fn run(&mut self) -> Result<RunOutcome, Fault> {
        loop {
            if let Some(limit) = self.max_cycles {
                if self.cpu.stats.cycles >= limit {
                    tracing::warn!(limit, pc = self.cpu.pc, "cycle limit reached");
                    return Ok(RunOutcome::CycleLimit);
                }
            }
            if self.cpu.step()? == State::Halted {
                return Ok(RunOutcome::Halted);
            }
        }
    }
}
