//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit stored-program computer, with the following:
//! 1. **Core:** Fetch-decode-execute engine, register file, condition flags, and ALU.
//! 2. **Memory:** A flat, bounds-checked 256-byte RAM shared by program, data, and stack.
//! 3. **ISA:** Opcode table, instruction decoding, and a disassembler.
//! 4. **Simulation:** Program loader, configuration, the `Simulator` front-end, and statistics.

/// Common types and constants (errors, register file, machine dimensions).
pub mod common;
/// Emulator configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (architectural state, execution engine, ALU).
pub mod core;
/// Instruction set (opcodes, decoded instructions, decoder, disassembler).
pub mod isa;
/// Program loader and the simulator front-end.
pub mod sim;
/// System memory.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds memory, registers, flags, and the program counter.
pub use crate::core::Cpu;
/// Simulator front-end: a configured CPU plus run-time policy.
pub use crate::sim::Simulator;
