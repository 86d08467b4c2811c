//! Unit tests for the simulator components, mirroring the `src/` tree.





/// Tests for statistics tracking during execution.
pub mod stats_verification;
