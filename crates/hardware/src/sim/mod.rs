//! Simulation utilities and program loading.
//!
//! Provides the text-format program loader and the `Simulator` front-end that
//! runs a loaded program under the configured run-time policy.

/// Program loader for the LS-8 text format.
pub mod loader;

/// Top-level simulator.
pub mod simulator;

pub use loader::LoadError;
pub use simulator::Simulator;
