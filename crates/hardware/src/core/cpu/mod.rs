//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Registers, condition flags, program counter, and run state.
//! 2. **Memory:** The 256-byte RAM, owned exclusively by the CPU.
//! 3. **Output:** The stream `PRN` writes to (stdout, or any `io::Write` in tests).
//! 4. **Observability:** Execution statistics and the per-instruction trace line.

/// Fetch-decode-execute loop and opcode dispatch.
pub mod execution;

/// Stack operations on memory (push, pop).
pub mod memory;

use std::io::{self, Write};

use crate::common::error::CpuError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::isa::disasm::disassemble;
use crate::soc::memory::Ram;
use crate::stats::SimStats;

/// Run state of the execution engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// `HLT` executed; terminal.
    Halted,
}

/// How a supervised run ended without faulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program executed `HLT`.
    Halted,
    /// The configured cycle limit was reached first.
    CycleLimit,
}

/// Main CPU structure containing all machine state.
///
/// `O` is the output stream `PRN` writes to.
#[derive(Debug)]
pub struct Cpu<O = io::Stdout> {
    /// System RAM.
    pub ram: Ram,
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Condition flags set by `CMP`.
    pub flags: Flags,
    /// Program Counter.
    pub pc: usize,
    /// Run state.
    pub state: State,
    /// Bytes pushed and not yet popped since the stack was last empty.
    ///
    /// `POP`/`RET` at depth 0 underflow. Writing `R7` outside a stack
    /// operation resets it.
    pub stack_depth: usize,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    output: O,
}

impl Cpu<io::Stdout> {
    /// Creates a CPU that prints to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<O: Write> Cpu<O> {
    /// Creates a CPU that prints to `output`.
    ///
    /// Memory, registers, and flags start zeroed, `PC` is 0, and the stack
    /// pointer holds `config.memory.stack_top`.
    pub fn with_output(config: &Config, output: O) -> Self {
        Self {
            ram: Ram::new(),
            regs: RegisterFile::with_stack_pointer(config.memory.stack_top),
            flags: Flags::default(),
            pc: 0,
            state: State::Running,
            stack_depth: 0,
            trace: config.general.trace_instructions,
            stats: SimStats::new(),
            output,
        }
    }

    /// Places a program image in memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidAddress` if the image is larger than memory.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.ram.load_at(0, program)?;
        tracing::debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Whether `HLT` has executed.
    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    /// The output stream.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the CPU and returns its output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Renders the machine state at the current PC.
    ///
    /// Format: `TRACE: PC | IR OP1 OP2 | R0 .. R7 | disassembly`, all bytes in two-digit hex.
    /// Bytes past the end of memory print as `--`.
    pub fn trace_line(&self) -> String {
        let image = self.ram.as_slice();
        let byte_at = |addr: usize| {
            image
                .get(addr)
                .map_or_else(|| "--".to_string(), |b| format!("{b:02X}"))
        };
        let regs: String = self
            .regs
            .values()
            .iter()
            .map(|r| format!(" {r:02X}"))
            .collect();
        let text = image.get(self.pc..).map_or_else(String::new, disassemble);

        format!(
            "TRACE: {:02X} | {} {} {} |{regs} | {text}",
            self.pc,
            byte_at(self.pc),
            byte_at(self.pc + 1),
            byte_at(self.pc + 2),
        )
    }
}
