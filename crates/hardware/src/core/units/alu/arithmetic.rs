//! ALU arithmetic operations.
//!
//! All results are truncated to 8 bits (mod 256). Division is floor division
//! on unsigned bytes and is never silently skipped on a zero divisor.

use crate::common::error::CpuError;
use crate::core::units::alu::AluOp;

/// Executes an arithmetic operation.
///
/// # Errors
///
/// * `CpuError::DivisionByZero` for `Div` with `b == 0`.
/// * `CpuError::UnsupportedOperation` for non-arithmetic operations.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, CpuError> {
    match op {
        AluOp::Add => Ok(a.wrapping_add(b)),
        AluOp::Sub => Ok(a.wrapping_sub(b)),
        AluOp::Mul => Ok(a.wrapping_mul(b)),
        AluOp::Div => a.checked_div(b).ok_or(CpuError::DivisionByZero),
        AluOp::Cmp => Err(CpuError::UnsupportedOperation {
            mnemonic: op.opcode().mnemonic(),
        }),
    }
}
