//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight LS-8 registers. It provides:
//! 1. **Storage:** Eight byte-wide registers (`R0`-`R7`).
//! 2. **Validation:** Out-of-range indices are rejected with `CpuError::InvalidRegister`.
//! 3. **Stack Pointer:** `R7` doubles as the stack pointer; there is no separate storage,
//!    so code that writes `R7` directly also moves the stack.

use crate::common::constants::{NUM_REGISTERS, SP};
use crate::common::error::CpuError;

/// The LS-8 register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Creates a zeroed register file whose stack pointer holds `stack_top`.
    pub const fn with_stack_pointer(stack_top: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP as usize] = stack_top;
        Self { regs }
    }

    /// Reads register `idx`.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidRegister` if `idx` is not in `0..=7`.
    pub fn read(&self, idx: u8) -> Result<u8, CpuError> {
        self.regs
            .get(usize::from(idx))
            .copied()
            .ok_or(CpuError::InvalidRegister { index: idx })
    }

    /// Writes `val` into register `idx`.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidRegister` if `idx` is not in `0..=7`.
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), CpuError> {
        let slot = self
            .regs
            .get_mut(usize::from(idx))
            .ok_or(CpuError::InvalidRegister { index: idx })?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    /// Overwrites the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP as usize] = val;
    }

    /// All eight registers in index order.
    pub const fn values(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Renders the register file as `R0=00 R1=00 ...` for diagnostics.
    pub fn dump(&self) -> String {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("R{i}={v:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
