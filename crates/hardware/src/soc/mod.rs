//! System Components.
//!
//! The LS-8 has no bus or memory-mapped devices; the only system component
//! outside the core is its flat RAM, owned exclusively by the CPU.

/// Flat, bounds-checked system RAM.
pub mod memory;

pub use memory::Ram;
