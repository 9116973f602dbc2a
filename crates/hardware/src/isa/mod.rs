//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, the decoded instruction form, the decoder, and the
//! disassembler.
//!
//! # Encoding
//!
//! Every instruction starts with a one-byte opcode laid out as `AABCDDDD`:
//!
//! * `AA`: number of operand bytes that follow (0-2).
//! * `B`: set for ALU operations.
//! * `C`: set for instructions that may set the PC.
//! * `DDDD`: instruction identifier.

/// Instruction decoding from memory.
pub mod decode;

/// Instruction disassembler for tracing and program listings.
pub mod disasm;

/// Decoded instruction representation.
pub mod instruction;

/// Opcode byte values and the `Opcode` enumeration.
pub mod opcodes;

pub use instruction::Instruction;
pub use opcodes::Opcode;
