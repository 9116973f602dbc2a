//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the byte-wide ALU used by the execution engine.
//! It is a pure function of its operation and two operand values; the engine
//! reads the operands from the register file and applies the result.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`compare`]:    Cmp

/// Byte arithmetic (add, subtract, multiply, divide).
pub mod arithmetic;

/// Unsigned comparison producing condition flags.
pub mod compare;

use crate::common::error::CpuError;
use crate::core::arch::flags::Flags;
use crate::isa::opcodes::Opcode;

/// Operations the ALU understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b` mod 256.
    Add,
    /// `a - b` mod 256.
    Sub,
    /// `a * b` mod 256.
    Mul,
    /// `floor(a / b)`; fails when `b == 0`.
    Div,
    /// Compare `a` with `b` as unsigned bytes.
    Cmp,
}

impl AluOp {
    /// The opcode that selects this operation.
    pub const fn opcode(self) -> Opcode {
        match self {
            Self::Add => Opcode::Add,
            Self::Sub => Opcode::Sub,
            Self::Mul => Opcode::Mul,
            Self::Div => Opcode::Div,
            Self::Cmp => Opcode::Cmp,
        }
    }
}

impl TryFrom<Opcode> for AluOp {
    type Error = CpuError;

    /// Routes an opcode to its ALU operation.
    ///
    /// Fails with `CpuError::UnsupportedOperation` for opcodes the ALU does not implement.
    fn try_from(op: Opcode) -> Result<Self, Self::Error> {
        match op {
            Opcode::Add => Ok(Self::Add),
            Opcode::Sub => Ok(Self::Sub),
            Opcode::Mul => Ok(Self::Mul),
            Opcode::Div => Ok(Self::Div),
            Opcode::Cmp => Ok(Self::Cmp),
            other => Err(CpuError::UnsupportedOperation {
                mnemonic: other.mnemonic(),
            }),
        }
    }
}

/// What an ALU operation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// New value for `regA`.
    Value(u8),
    /// New condition flags; registers are untouched.
    Flags(Flags),
}

/// Arithmetic Logic Unit (ALU) for byte operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two operand values.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - Value of `regA`
    /// * `b`  - Value of `regB`
    ///
    /// # Errors
    ///
    /// Returns `CpuError::DivisionByZero` for `Div` with `b == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9).unwrap(), AluOutput::Value(72));
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 1).unwrap(), AluOutput::Value(0));
    /// assert!(Alu::execute(AluOp::Div, 1, 0).is_err());
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutput, CpuError> {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => {
                arithmetic::execute(op, a, b).map(AluOutput::Value)
            }
            AluOp::Cmp => Ok(AluOutput::Flags(compare::compare(a, b))),
        }
    }
}
