//! Stack Operations.
//!
//! This module implements the LS-8 stack on top of RAM. It performs the following:
//! 1. **Push:** Decrement `SP`, then store at `mem[SP]`.
//! 2. **Pop:** Load from `mem[SP]`, then increment `SP`.
//! 3. **Underflow Detection:** Popping when nothing has been pushed fails.
//!
//! `SP` is register `R7`, so it moves modulo 256 like any other register. The
//! stack is tracked by depth rather than by address, so a stack relocated by
//! writing `R7` or one that wraps below address 0 behaves like any other.

use std::io::Write;

use super::Cpu;
use crate::common::constants::{MEMORY_SIZE, SP};
use crate::common::error::CpuError;

impl<O: Write> Cpu<O> {
    /// Pushes the value of register `reg` onto the stack.
    ///
    /// `SP` is decremented before the register is read, so `PUSH R7` stores the
    /// decremented stack pointer.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidRegister` for a bad register index.
    pub fn push_reg(&mut self, reg: u8) -> Result<(), CpuError> {
        let sp = self.regs.sp().wrapping_sub(1);
        let val = if reg == SP { sp } else { self.regs.read(reg)? };
        self.regs.set_sp(sp);
        self.ram.write(usize::from(sp), val)?;
        self.grow_stack();
        Ok(())
    }

    /// Pushes a raw byte onto the stack.
    ///
    /// # Errors
    ///
    /// Propagates memory errors; the address is always in range for an 8-bit `SP`.
    pub fn push(&mut self, val: u8) -> Result<(), CpuError> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(usize::from(sp), val)?;
        self.grow_stack();
        Ok(())
    }

    /// Pops the top of the stack into register `reg`.
    ///
    /// The register is written before `SP` is incremented, so `POP R7` leaves
    /// `SP` one past the popped value.
    ///
    /// # Errors
    ///
    /// * `CpuError::StackUnderflow` if nothing has been pushed.
    /// * `CpuError::InvalidRegister` for a bad register index.
    pub fn pop_reg(&mut self, reg: u8) -> Result<(), CpuError> {
        let val = self.peek()?;
        self.regs.write(reg, val)?;
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
        self.stack_depth -= 1;
        Ok(())
    }

    /// Pops and returns the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::StackUnderflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<u8, CpuError> {
        let val = self.peek()?;
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
        self.stack_depth -= 1;
        Ok(val)
    }

    /// Writes register `reg` outside of a stack operation.
    ///
    /// Loading `R7` this way moves the stack: whatever `SP` now holds is an
    /// empty stack.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidRegister` for a bad register index.
    pub fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), CpuError> {
        self.regs.write(reg, val)?;
        if reg == SP {
            self.stack_depth = 0;
            tracing::debug!(sp = val, "stack relocated");
        }
        Ok(())
    }

    /// Reads the top of the stack without moving `SP`.
    fn peek(&self) -> Result<u8, CpuError> {
        let sp = self.regs.sp();
        if self.stack_depth == 0 {
            return Err(CpuError::StackUnderflow { sp });
        }
        self.ram.read(usize::from(sp))
    }

    /// Counts one pushed byte; a full wrap of memory overwrites the oldest entry.
    fn grow_stack(&mut self) {
        self.stack_depth = (self.stack_depth + 1).min(MEMORY_SIZE);
    }
}
