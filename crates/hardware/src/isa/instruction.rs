//! Decoded instruction representation.
//!
//! An `Instruction` is an opcode together with its operands, already interpreted
//! per opcode: register operands are validated indices, immediates are raw bytes.

use std::fmt;

use crate::core::units::alu::AluOp;
use crate::isa::opcodes::Opcode;

/// A fully decoded LS-8 instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `NOP`
    Nop,
    /// `HLT`
    Hlt,
    /// `RET`
    Ret,
    /// `LDI reg, imm`
    Ldi {
        /// Destination register.
        reg: u8,
        /// Value to load.
        imm: u8,
    },
    /// `PRN reg`
    Prn {
        /// Register to print.
        reg: u8,
    },
    /// `PUSH reg`
    Push {
        /// Register to push.
        reg: u8,
    },
    /// `POP reg`
    Pop {
        /// Destination register.
        reg: u8,
    },
    /// `CALL reg`
    Call {
        /// Register holding the subroutine address.
        reg: u8,
    },
    /// `JMP reg`
    Jmp {
        /// Register holding the target address.
        reg: u8,
    },
    /// `JEQ reg`
    Jeq {
        /// Register holding the target address.
        reg: u8,
    },
    /// `JNE reg`
    Jne {
        /// Register holding the target address.
        reg: u8,
    },
    /// Two-register ALU operation (`ADD`, `SUB`, `MUL`, `DIV`, `CMP`).
    Alu {
        /// ALU operation.
        op: AluOp,
        /// Left operand, and destination for arithmetic.
        reg_a: u8,
        /// Right operand.
        reg_b: u8,
    },
}

impl Instruction {
    /// The opcode this instruction was decoded from.
    pub const fn opcode(self) -> Opcode {
        match self {
            Self::Nop => Opcode::Nop,
            Self::Hlt => Opcode::Hlt,
            Self::Ret => Opcode::Ret,
            Self::Ldi { .. } => Opcode::Ldi,
            Self::Prn { .. } => Opcode::Prn,
            Self::Push { .. } => Opcode::Push,
            Self::Pop { .. } => Opcode::Pop,
            Self::Call { .. } => Opcode::Call,
            Self::Jmp { .. } => Opcode::Jmp,
            Self::Jeq { .. } => Opcode::Jeq,
            Self::Jne { .. } => Opcode::Jne,
            Self::Alu { op, .. } => op.opcode(),
        }
    }

    /// Encoded length in bytes.
    #[inline]
    pub const fn length(self) -> usize {
        self.opcode().length()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.opcode().mnemonic();
        match *self {
            Self::Nop | Self::Hlt | Self::Ret => f.write_str(mnemonic),
            Self::Ldi { reg, imm } => write!(f, "{mnemonic} R{reg},{imm}"),
            Self::Prn { reg }
            | Self::Push { reg }
            | Self::Pop { reg }
            | Self::Call { reg }
            | Self::Jmp { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg } => write!(f, "{mnemonic} R{reg}"),
            Self::Alu { reg_a, reg_b, .. } => write!(f, "{mnemonic} R{reg_a},R{reg_b}"),
        }
    }
}
