//! Held-out evaluation of a fitted classifier.

use rayon::prelude::*;

use crate::classifier::{Label, TextClassifier};
use crate::error::{Result, SmsGuardError};
use crate::evaluation::dataset::LabeledDataset;
use crate::evaluation::metrics::{ConfusionMatrix, EvaluationReport};
use crate::evaluation::split::{SplitConfig, train_test_split};

/// Scores a classifier on the test half of a deterministic split.
///
/// The classifier is only read; repeated evaluations of the same model on
/// the same data give the same report.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    split: SplitConfig,
}

impl Evaluator {
    pub fn new(split: SplitConfig) -> Self {
        Self { split }
    }

    pub fn split_config(&self) -> &SplitConfig {
        &self.split
    }

    /// Predict every test row of `dataset` and build the report.
    pub fn evaluate<C>(&self, classifier: &C, dataset: &LabeledDataset) -> Result<EvaluationReport>
    where
        C: TextClassifier + ?Sized,
    {
        let split = train_test_split(&dataset.labels(), &self.split)?;
        if split.test.is_empty() {
            return Err(SmsGuardError::dataset("test split is empty"));
        }

        let samples = dataset.samples();
        let pairs: Vec<(Label, Label)> = split
            .test
            .par_iter()
            .map(|&i| {
                let sample = &samples[i];
                classifier
                    .predict(&sample.text)
                    .map(|prediction| (sample.label, prediction.label))
            })
            .collect::<Result<_>>()?;

        let report = EvaluationReport::from_matrix(ConfusionMatrix::from_pairs(pairs));

        log::info!(
            "evaluated {} on {} held-out messages: accuracy {}%",
            classifier.name(),
            split.test.len(),
            report.accuracy
        );

        Ok(report)
    }
}
