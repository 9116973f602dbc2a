//! LS-8 architectural components.
//!
//! The general-purpose registers live in [`crate::common::reg`]; this module
//! holds the condition flags set by `CMP`.

/// Condition flags (`E`, `L`, `G`).
pub mod flags;

pub use flags::Flags;
