//! Fraud classification using TF-IDF features, multinomial Naive Bayes and a
//! keyword overlay.
//!
//! # Architecture
//!
//! - `TfIdfVectorizer`: feature extraction into sparse, L2-normalized vectors
//! - `MultinomialNaiveBayes`: per-class priors and smoothed term likelihoods
//! - `FraudModel`: the fitted vectorizer/classifier pair, saved as one artifact
//! - `RiskLexicon`: substring scan for risk keywords
//! - `FraudDetector`: model verdict plus matched keywords
//! - `TextClassifier` trait: common interface used by the evaluator
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use smsguard::classifier::{FraudDetector, FraudModel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = FraudModel::load("model.json")?;
//! let detector = FraudDetector::new(Arc::new(model));
//!
//! let verdict = detector.classify("Your account is blocked, verify now")?;
//! println!("{} ({}%) {:?}", verdict.prediction, verdict.confidence, verdict.risky_words);
//! # Ok(())
//! # }
//! ```

mod classifier;
pub mod detector;
pub mod lexicon;
pub mod model;
pub mod naive_bayes;
pub mod tfidf;
mod types;

pub use classifier::TextClassifier;
pub use detector::FraudDetector;
pub use lexicon::{RISK_LEXICON, RiskCategory, RiskLexicon, RiskTerm, scan};
pub use model::{FraudModel, MODEL_FORMAT_VERSION};
pub use naive_bayes::{MultinomialNaiveBayes, NaiveBayesConfig};
pub use tfidf::{SparseVector, TfIdfVectorizer, Vocabulary};
pub use types::{
    ClassifyRequest, FRAUD_VERDICT, Label, Prediction, RiskLevel, SAFE_VERDICT, SmsVerdict,
};

pub(crate) use types::round2;
