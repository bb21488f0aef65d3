//! Data models for probe samples and run summaries

pub mod sample;
pub mod summary;

pub use sample::{ProbeStatus, Sample};
pub use summary::RunSummary;
