//! Text analysis module.
//!
//! Turns raw SMS text into the lowercase, stop-word-free terms the TF-IDF
//! feature extractor counts.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
