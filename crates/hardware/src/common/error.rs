//! Fault definitions.
//!
//! This module defines the error handling for the emulator core. It provides:
//! 1. **Error Taxonomy:** `CpuError`, one variant per way an instruction can fail.
//! 2. **Fault Context:** `Fault`, which pins a `CpuError` to the PC and instruction byte
//!    that raised it so callers can report where a program died.
//!
//! Every error is fatal to the run. The core never exits the process; mapping a fault to
//! an exit status is left to the caller.

use std::io;

use thiserror::Error;

/// Errors raised while executing an LS-8 program.
#[derive(Debug, Error)]
pub enum CpuError {
    /// Memory access outside `0x00..=0xFF`.
    #[error("invalid memory address {address:#04x}")]
    InvalidAddress {
        /// The offending address.
        address: usize,
    },

    /// Register index outside `0..=7`.
    #[error("invalid register R{index}")]
    InvalidRegister {
        /// The offending register index.
        index: u8,
    },

    /// `DIV` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `POP` or `RET` with nothing on the stack.
    #[error("stack underflow (SP={sp:#04x})")]
    StackUnderflow {
        /// Stack pointer value at the time of the access.
        sp: u8,
    },

    /// Instruction byte that is not in the opcode table.
    #[error("unknown instruction {opcode:#010b}")]
    UnknownInstruction {
        /// The undecodable instruction byte.
        opcode: u8,
    },

    /// A non-ALU operation was routed to the ALU.
    #[error("unsupported ALU operation {mnemonic}")]
    UnsupportedOperation {
        /// Mnemonic of the rejected operation.
        mnemonic: &'static str,
    },

    /// The `PRN` output stream could not be written.
    #[error("output stream error: {0}")]
    Output(#[from] io::Error),
}

/// A `CpuError` together with the machine location that raised it.
#[derive(Debug, Error)]
#[error("{source} at PC {pc:#04x} (IR {instruction:#010b})")]
pub struct Fault {
    /// Program counter of the faulting instruction.
    pub pc: usize,
    /// Instruction byte at `pc`, or `0` when `pc` itself was out of range.
    pub instruction: u8,
    /// What went wrong.
    #[source]
    pub source: CpuError,
}

impl Fault {
    /// Returns `true` when the run died on an undecodable instruction byte.
    pub const fn is_unknown_instruction(&self) -> bool {
        matches!(self.source, CpuError::UnknownInstruction { .. })
    }
}
