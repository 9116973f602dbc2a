//! LS-8 Instruction Decoder.
//!
//! Turns the bytes at a program counter into an `Instruction`. Only the operand
//! bytes the opcode actually uses are fetched, and register operands are checked
//! against the register file size here so the execution engine never sees a bad index.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::CpuError;
use crate::core::units::alu::AluOp;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::Opcode;

/// Fetches the byte at `addr` from `image`.
#[inline]
fn fetch(image: &[u8], addr: usize) -> Result<u8, CpuError> {
    image
        .get(addr)
        .copied()
        .ok_or(CpuError::InvalidAddress { address: addr })
}

/// Fetches the operand at `addr` and validates it as a register index.
#[inline]
fn fetch_reg(image: &[u8], addr: usize) -> Result<u8, CpuError> {
    let idx = fetch(image, addr)?;
    if usize::from(idx) < NUM_REGISTERS {
        Ok(idx)
    } else {
        Err(CpuError::InvalidRegister { index: idx })
    }
}

/// Decodes the instruction starting at `pc` in `image`.
///
/// # Errors
///
/// * `CpuError::UnknownInstruction` if the opcode byte is not in the table.
/// * `CpuError::InvalidAddress` if the opcode or a needed operand lies past the end of `image`.
/// * `CpuError::InvalidRegister` if a register operand is not in `0..=7`.
pub fn decode(image: &[u8], pc: usize) -> Result<Instruction, CpuError> {
    let opcode = Opcode::try_from(fetch(image, pc)?)?;
    let reg_a = || fetch_reg(image, pc + 1);
    let reg_b = || fetch_reg(image, pc + 2);

    Ok(match opcode {
        Opcode::Nop => Instruction::Nop,
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Ret => Instruction::Ret,
        Opcode::Ldi => Instruction::Ldi {
            reg: reg_a()?,
            imm: fetch(image, pc + 2)?,
        },
        Opcode::Prn => Instruction::Prn { reg: reg_a()? },
        Opcode::Push => Instruction::Push { reg: reg_a()? },
        Opcode::Pop => Instruction::Pop { reg: reg_a()? },
        Opcode::Call => Instruction::Call { reg: reg_a()? },
        Opcode::Jmp => Instruction::Jmp { reg: reg_a()? },
        Opcode::Jeq => Instruction::Jeq { reg: reg_a()? },
        Opcode::Jne => Instruction::Jne { reg: reg_a()? },
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div | Opcode::Cmp => Instruction::Alu {
            op: AluOp::try_from(opcode)?,
            reg_a: reg_a()?,
            reg_b: reg_b()?,
        },
    })
}
