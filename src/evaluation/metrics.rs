//! Confusion matrix and evaluation report.

use serde::{Deserialize, Serialize};

use crate::classifier::{Label, round2};

/// Class names in report order.
pub const REPORT_LABELS: [&str; 2] = ["ham(0)=safe", "spam(1)=fraud"];

/// Binary confusion matrix, rows are actual classes, columns predicted.
///
/// Layout is `[[TN, FP], [FN, TP]]` with fraud as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfusionMatrix([[usize; 2]; 2]);

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one prediction.
    pub fn record(&mut self, actual: Label, predicted: Label) {
        self.0[actual.index()][predicted.index()] += 1;
    }

    pub fn from_pairs<I: IntoIterator<Item = (Label, Label)>>(pairs: I) -> Self {
        let mut matrix = Self::new();
        for (actual, predicted) in pairs {
            matrix.record(actual, predicted);
        }
        matrix
    }

    pub fn cells(&self) -> [[usize; 2]; 2] {
        self.0
    }

    pub fn true_negatives(&self) -> usize {
        self.0[0][0]
    }

    pub fn false_positives(&self) -> usize {
        self.0[0][1]
    }

    pub fn false_negatives(&self) -> usize {
        self.0[1][0]
    }

    pub fn true_positives(&self) -> usize {
        self.0[1][1]
    }

    pub fn total(&self) -> usize {
        self.0.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        self.true_negatives() + self.true_positives()
    }

    /// Share of correct predictions in [0, 1]; 0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }

    /// Fraud precision: TP / (TP + FP).
    pub fn precision(&self) -> f64 {
        ratio(
            self.true_positives(),
            self.true_positives() + self.false_positives(),
        )
    }

    /// Fraud recall: TP / (TP + FN).
    pub fn recall(&self) -> f64 {
        ratio(
            self.true_positives(),
            self.true_positives() + self.false_negatives(),
        )
    }

    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 { 0.0 } else { 2.0 * p * r / (p + r) }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Result of evaluating a model on held-out data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Percentage of correct predictions, rounded to 2 decimals.
    pub accuracy: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub labels: [String; 2],
}

impl EvaluationReport {
    pub fn from_matrix(confusion_matrix: ConfusionMatrix) -> Self {
        Self {
            accuracy: round2(confusion_matrix.accuracy() * 100.0),
            confusion_matrix,
            labels: REPORT_LABELS.map(String::from),
        }
    }
}
