//! Multinomial Naive Bayes over TF-IDF vectors.
//!
//! Each class keeps a smoothed log-probability for every vocabulary term:
//!
//! ```text
//! log P(t | c) = ln((w(t, c) + alpha) / (W(c) + alpha * |V|))
//! ```
//!
//! where `w(t, c)` is the summed TF-IDF weight of `t` over the training
//! documents of class `c` and `W(c)` the summed weight of all terms. Class
//! priors are the empirical document frequencies.

use serde::{Deserialize, Serialize};

use crate::classifier::tfidf::SparseVector;
use crate::classifier::types::{Label, Prediction, round2};
use crate::error::{Result, SmsGuardError};

/// Smoothing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Additive (Laplace/Lidstone) smoothing. Must be positive.
    pub alpha: f64,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl NaiveBayesConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(SmsGuardError::invalid_config(format!(
                "alpha must be a positive number, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Fitted two-class multinomial Naive Bayes model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNaiveBayes {
    alpha: f64,
    n_features: usize,
    class_count: [usize; 2],
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNaiveBayes {
    /// Fit on labeled vectors of dimension `n_features`.
    ///
    /// Both classes must be present in `labels`.
    pub fn fit(
        config: &NaiveBayesConfig,
        vectors: &[SparseVector],
        labels: &[Label],
        n_features: usize,
    ) -> Result<Self> {
        config.validate()?;

        if vectors.len() != labels.len() {
            return Err(SmsGuardError::invalid_argument(format!(
                "{} vectors but {} labels",
                vectors.len(),
                labels.len()
            )));
        }
        if vectors.is_empty() {
            return Err(SmsGuardError::model("cannot fit on an empty training set"));
        }
        if n_features == 0 {
            return Err(SmsGuardError::model("cannot fit with zero features"));
        }

        let mut class_count = [0usize; 2];
        let mut feature_weight = [vec![0.0f64; n_features], vec![0.0f64; n_features]];

        for (vector, label) in vectors.iter().zip(labels) {
            let c = label.index();
            class_count[c] += 1;
            for (index, weight) in vector.iter() {
                let slot = feature_weight[c].get_mut(index).ok_or_else(|| {
                    SmsGuardError::model(format!(
                        "feature index {index} out of range for {n_features} features"
                    ))
                })?;
                *slot += weight;
            }
        }

        if let Some(missing) = Label::ALL.iter().find(|l| class_count[l.index()] == 0) {
            return Err(SmsGuardError::model(format!(
                "training set has no {missing} documents"
            )));
        }

        let total = vectors.len() as f64;
        let class_log_prior = class_count.map(|count| (count as f64 / total).ln());

        let alpha = config.alpha;
        let feature_log_prob = feature_weight.map(|weights| {
            let denominator = weights.iter().sum::<f64>() + alpha * n_features as f64;
            weights
                .into_iter()
                .map(|w| ((w + alpha) / denominator).ln())
                .collect::<Vec<f64>>()
        });

        log::debug!(
            "fitted naive bayes: {} safe / {} fraud documents, {} features",
            class_count[Label::Safe.index()],
            class_count[Label::Fraud.index()],
            n_features
        );

        Ok(Self {
            alpha,
            n_features,
            class_count,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Unnormalized log posterior of each class for `x`.
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> Result<[f64; 2]> {
        if let Some(max) = x.max_index() {
            if max >= self.n_features {
                return Err(SmsGuardError::model(format!(
                    "feature index {max} out of range for {} features",
                    self.n_features
                )));
            }
        }

        let mut scores = self.class_log_prior;
        for (score, log_prob) in scores.iter_mut().zip(&self.feature_log_prob) {
            *score += x.iter().map(|(i, w)| w * log_prob[i]).sum::<f64>();
        }
        Ok(scores)
    }

    /// Posterior probabilities, indexed by [`Label::index`].
    pub fn predict_proba(&self, x: &SparseVector) -> Result<[f64; 2]> {
        let scores = self.joint_log_likelihood(x)?;
        let max = scores[0].max(scores[1]);
        let exp = scores.map(|s| (s - max).exp());
        let sum: f64 = exp.iter().sum();
        Ok(exp.map(|e| e / sum))
    }

    /// Most probable class. An exact tie resolves to [`Label::Safe`].
    pub fn predict(&self, x: &SparseVector) -> Result<Label> {
        let scores = self.joint_log_likelihood(x)?;
        Ok(argmax(scores))
    }

    /// Class, posteriors and percentage confidence in one pass.
    pub fn predict_with_confidence(&self, x: &SparseVector) -> Result<Prediction> {
        let probabilities = self.predict_proba(x)?;
        let label = argmax(probabilities);
        Ok(Prediction {
            label,
            probabilities,
            confidence: round2(probabilities[label.index()] * 100.0),
        })
    }

    /// Prior probability of each class.
    pub fn class_prior(&self) -> [f64; 2] {
        self.class_log_prior.map(f64::exp)
    }

    /// Training documents seen per class.
    pub fn class_count(&self) -> [usize; 2] {
        self.class_count
    }

    /// Dimension of the vectors this model accepts.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Internal consistency check for deserialized models.
    pub(crate) fn validate(&self) -> Result<()> {
        for (label, log_prob) in Label::ALL.iter().zip(&self.feature_log_prob) {
            if log_prob.len() != self.n_features {
                return Err(SmsGuardError::model(format!(
                    "{label} class has {} term weights, expected {}",
                    log_prob.len(),
                    self.n_features
                )));
            }
        }
        Ok(())
    }
}

fn argmax(values: [f64; 2]) -> Label {
    if values[Label::Fraud.index()] > values[Label::Safe.index()] {
        Label::Fraud
    } else {
        Label::Safe
    }
}
