//! Dataset handling, training and held-out evaluation.
//!
//! - `LabeledDataset`: CSV loading with label normalization and cleaning
//! - `train_test_split`: seeded, optionally stratified partition
//! - `Trainer`: fits a `FraudModel` on the training half
//! - `Evaluator`: confusion matrix and accuracy on the test half

pub mod dataset;
pub mod evaluator;
pub mod metrics;
pub mod split;
pub mod training;

pub use dataset::{CleaningStats, DatasetConfig, LabeledDataset, LabeledSample};
pub use evaluator::Evaluator;
pub use metrics::{ConfusionMatrix, EvaluationReport, REPORT_LABELS};
pub use split::{SplitConfig, TrainTestSplit, train_test_split};
pub use training::{Trainer, TrainingConfig};
