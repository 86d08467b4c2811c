//! Simulation drivers: program loading.

/// Program-file parsing and loading.
pub mod loader;
