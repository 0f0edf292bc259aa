//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod pipeline;
mod standard;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::{AnalysisConfig, StandardAnalyzer, StopWords};
