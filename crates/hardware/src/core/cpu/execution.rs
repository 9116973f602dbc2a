//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the instruction byte at `PC`.
//! 2. **Decode:** Builds an `Instruction`, fetching only the operands the opcode uses.
//! 3. **Execute:** Dispatches to the ALU or applies register, memory, stack, and PC effects.
//! 4. **Advance:** Moves `PC` past the instruction unless the instruction set it explicitly.
//!
//! Any error aborts the run; it is returned as a `Fault` carrying the PC and instruction byte.

use std::io::Write;

use super::{Cpu, State};
use crate::common::error::{CpuError, Fault};
use crate::core::units::alu::{Alu, AluOp, AluOutput};
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

impl<O: Write> Cpu<O> {
    /// Executes one instruction.
    ///
    /// Returns the run state afterwards. Stepping a halted CPU does nothing.
    ///
    /// # Errors
    ///
    /// Returns a `Fault` if the instruction could not be fetched, decoded, or executed.
    /// Registers and memory keep whatever state they had when the fault was raised.
    pub fn step(&mut self) -> Result<State, Fault> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }

        let pc = self.pc;
        if self.trace {
            tracing::trace!("{}", self.trace_line());
        }

        self.execute(pc).map_err(|source| {
            let fault = Fault {
                pc,
                instruction: self.ram.read(pc).unwrap_or(0),
                source,
            };
            tracing::warn!(%fault, "run aborted");
            fault
        })
    }

    /// Runs until `HLT`.
    ///
    /// # Errors
    ///
    /// Returns the first `Fault` raised; nothing after it is executed.
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.step()? == State::Running {}
        Ok(())
    }

    /// Decodes and executes the instruction at `pc`.
    ///
    /// Only instructions that complete are counted in the statistics.
    fn execute(&mut self, pc: usize) -> Result<State, CpuError> {
        let inst = decode(self.ram.as_slice(), pc)?;
        self.pc = self.apply(inst, pc)?;
        self.stats.record(&inst);

        if self.state == State::Halted {
            tracing::debug!(pc, cycles = self.stats.cycles, "halted");
        }
        Ok(self.state)
    }

    /// Applies the effects of `inst` and returns the next `PC`.
    fn apply(&mut self, inst: Instruction, pc: usize) -> Result<usize, CpuError> {
        let next = pc + inst.length();
        let mut target = None;

        match inst {
            Instruction::Nop => {}
            Instruction::Hlt => {
                self.state = State::Halted;
                return Ok(pc);
            }
            Instruction::Ldi { reg, imm } => self.write_reg(reg, imm)?,
            Instruction::Prn { reg } => {
                let val = self.regs.read(reg)?;
                writeln!(self.output, "{val}")?;
            }
            Instruction::Alu { op, reg_a, reg_b } => self.alu(op, reg_a, reg_b)?,
            Instruction::Push { reg } => self.push_reg(reg)?,
            Instruction::Pop { reg } => self.pop_reg(reg)?,
            Instruction::Call { reg } => {
                let ret =
                    u8::try_from(next).map_err(|_| CpuError::InvalidAddress { address: next })?;
                self.push(ret)?;
                target = Some(self.regs.read(reg)?);
            }
            Instruction::Ret => target = Some(self.pop()?),
            Instruction::Jmp { reg } => target = Some(self.regs.read(reg)?),
            Instruction::Jeq { reg } => {
                if self.flags.equal {
                    target = Some(self.regs.read(reg)?);
                }
            }
            Instruction::Jne { reg } => {
                if !self.flags.equal {
                    target = Some(self.regs.read(reg)?);
                }
            }
        }

        Ok(target.map_or(next, usize::from))
    }

    /// Applies an ALU operation to `regA` and `regB`.
    ///
    /// Arithmetic writes `regA`; `CMP` writes only the flags. On error nothing changes.
    fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), CpuError> {
        let a = self.regs.read(reg_a)?;
        let b = self.regs.read(reg_b)?;
        match Alu::execute(op, a, b)? {
            AluOutput::Value(val) => self.write_reg(reg_a, val),
            AluOutput::Flags(flags) => {
                self.flags = flags;
                Ok(())
            }
        }
    }
}
