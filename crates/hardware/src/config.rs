//! Configuration for the simulator.
//!
//! The machine geometry (memory size, register count, stack region) is
//! architectural and lives in [`crate::common::constants`]; configuration
//! covers only run behavior. Values arrive from CLI flags or can be
//! deserialized from a config file.

use serde::Deserialize;

/// Run configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit a TRACE line before each executed instruction.
    pub trace_instructions: bool,
    /// Print the statistics report after the run completes.
    pub print_stats: bool,
}
