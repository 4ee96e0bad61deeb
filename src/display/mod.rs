//! Human-readable renderings of valuations.
pub mod trace;

pub use trace::format_trace;
