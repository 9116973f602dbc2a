//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Machine dimensions and the reserved stack-pointer register.
//! 2. **Error Handling:** The fault taxonomy raised by memory, registers, ALU, and decoder.
//! 3. **Register Management:** The eight-entry general-purpose register file.

/// Machine-wide constants.
pub mod constants;

/// Error types raised by the core.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DEFAULT_STACK_TOP, MEMORY_SIZE, NUM_REGISTERS, SP};
pub use error::{CpuError, Fault};
pub use reg::RegisterFile;
