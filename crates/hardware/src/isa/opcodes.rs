//! LS-8 Opcodes.
//!
//! Defines the byte encoding of every instruction and the closed `Opcode`
//! enumeration mapped from it. Any byte not listed here is an unknown instruction.

use std::fmt;

use crate::common::constants::{ALU_OP_BIT, OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_BIT};
use crate::common::error::CpuError;

/// No operation.
pub const NOP: u8 = 0b0000_0000;

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Print a register as a decimal number.
pub const PRN: u8 = 0b0100_0111;

/// Call the subroutine whose address is held in a register.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// `regA += regB`.
pub const ADD: u8 = 0b1010_0000;

/// `regA -= regB`.
pub const SUB: u8 = 0b1010_0001;

/// `regA *= regB`.
pub const MUL: u8 = 0b1010_0010;

/// `regA /= regB` (floor division).
pub const DIV: u8 = 0b1010_0011;

/// Compare `regA` with `regB` and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// The LS-8 instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// No operation.
    Nop = NOP,
    /// Halt.
    Hlt = HLT,
    /// Return from subroutine.
    Ret = RET,
    /// Push register.
    Push = PUSH,
    /// Pop into register.
    Pop = POP,
    /// Print register.
    Prn = PRN,
    /// Call subroutine.
    Call = CALL,
    /// Unconditional jump.
    Jmp = JMP,
    /// Jump if equal.
    Jeq = JEQ,
    /// Jump if not equal.
    Jne = JNE,
    /// Load immediate.
    Ldi = LDI,
    /// Add.
    Add = ADD,
    /// Subtract.
    Sub = SUB,
    /// Multiply.
    Mul = MUL,
    /// Divide.
    Div = DIV,
    /// Compare.
    Cmp = CMP,
}

impl Opcode {
    /// Every opcode, in encoding order.
    pub const ALL: [Self; 16] = [
        Self::Nop,
        Self::Hlt,
        Self::Ret,
        Self::Push,
        Self::Pop,
        Self::Prn,
        Self::Call,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Ldi,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Cmp,
    ];

    /// The encoded opcode byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes, taken from bits 7-6 of the encoding.
    #[inline]
    pub const fn operand_count(self) -> usize {
        operand_count(self as u8)
    }

    /// Total instruction length in bytes (opcode plus operands).
    #[inline]
    pub const fn length(self) -> usize {
        self.operand_count() + 1
    }

    /// Whether bit 5 marks this as an ALU operation.
    #[inline]
    pub const fn is_alu(self) -> bool {
        self as u8 & ALU_OP_BIT != 0
    }

    /// Whether bit 4 marks this as an instruction that may set the PC.
    #[inline]
    pub const fn sets_pc(self) -> bool {
        self as u8 & SETS_PC_BIT != 0
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ret => "RET",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Call => "CALL",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Ldi => "LDI",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Cmp => "CMP",
        }
    }
}

/// Operand count encoded in bits 7-6 of any instruction byte, known or not.
#[inline]
pub const fn operand_count(byte: u8) -> usize {
    ((byte >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK) as usize
}

impl TryFrom<u8> for Opcode {
    type Error = CpuError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Ok(match byte {
            NOP => Self::Nop,
            HLT => Self::Hlt,
            RET => Self::Ret,
            PUSH => Self::Push,
            POP => Self::Pop,
            PRN => Self::Prn,
            CALL => Self::Call,
            JMP => Self::Jmp,
            JEQ => Self::Jeq,
            JNE => Self::Jne,
            LDI => Self::Ldi,
            ADD => Self::Add,
            SUB => Self::Sub,
            MUL => Self::Mul,
            DIV => Self::Div,
            CMP => Self::Cmp,
            _ => return Err(CpuError::UnknownInstruction { opcode: byte }),
        })
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.byte()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
