//! Execution units.
//!
//! The LS-8 has a single functional unit: the byte-wide ALU.

/// Arithmetic Logic Unit.
pub mod alu;
