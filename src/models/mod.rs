//! Data models for titlescan.

mod analysis;

pub use analysis::{AnalysisRequest, AnalysisResult, PolicyFields, ProcessingStatus};
