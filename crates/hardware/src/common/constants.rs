//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the LS-8. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Register count and the stack-pointer index.
//! 3. **Encoding Constants:** Field positions inside an instruction byte.

/// Number of addressable bytes of RAM (addresses `0x00..=0xFF`).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Index of the register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer value; the stack grows downward from just under the top of memory.
pub const DEFAULT_STACK_TOP: u8 = 0xF4;

/// Shift that brings the operand-count field (bits 7-6) down to bit 0.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Mask for the operand-count field once shifted.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Bit 5 of an instruction byte: set for ALU operations.
pub const ALU_OP_BIT: u8 = 0b0010_0000;

/// Bit 4 of an instruction byte: set for instructions that may write the PC.
pub const SETS_PC_BIT: u8 = 0b0001_0000;
