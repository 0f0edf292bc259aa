//! # smsguard
//!
//! Fraud SMS detection for short text messages.
//!
//! ## Features
//!
//! - TF-IDF feature extraction over a configurable analysis pipeline
//! - Multinomial Naive Bayes with additive smoothing
//! - Keyword overlay listing the risk terms found in a message
//! - Deterministic held-out evaluation (accuracy, confusion matrix)
//! - JSON model artifacts and a command line tool
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use smsguard::classifier::{FraudDetector, Label};
//! use smsguard::evaluation::{LabeledDataset, LabeledSample, Trainer};
//!
//! # fn main() -> smsguard::error::Result<()> {
//! let mut samples = Vec::new();
//! for i in 0..5 {
//!     samples.push(LabeledSample::new(Label::Fraud, format!("claim your cash prize {i}")));
//!     samples.push(LabeledSample::new(Label::Safe, format!("dinner with family {i}")));
//! }
//! let dataset = LabeledDataset::new(samples)?;
//!
//! let model = Trainer::default().train(&dataset)?;
//! let detector = FraudDetector::new(Arc::new(model));
//!
//! let verdict = detector.classify("Claim the prize!")?;
//! assert_eq!(verdict.prediction, "FRAUD SMS");
//! assert_eq!(verdict.risky_words, vec!["prize", "claim"]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluation;

pub mod prelude {
    pub use crate::classifier::{
        ClassifyRequest, FraudDetector, FraudModel, Label, RiskLevel, SmsVerdict, TextClassifier,
    };
    pub use crate::config::SmsGuardConfig;
    pub use crate::error::{Result, SmsGuardError};
    pub use crate::evaluation::{Evaluator, EvaluationReport, LabeledDataset, Trainer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
