//! Structural inspection of dependency graphs.
pub mod telemetry;
pub mod topology;
