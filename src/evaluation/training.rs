//! Fitting a [`FraudModel`] from a labeled dataset.
//!
//! The vectorizer sees every cleaned message; the classifier only sees the
//! training half of the same split the [`Evaluator`](super::Evaluator) uses,
//! so a later evaluation with the same [`SplitConfig`] scores held-out rows.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalysisConfig;
use crate::classifier::{FraudModel, Label, MultinomialNaiveBayes, NaiveBayesConfig, TfIdfVectorizer};
use crate::error::Result;
use crate::evaluation::dataset::LabeledDataset;
use crate::evaluation::split::{SplitConfig, train_test_split};

/// Everything that shapes a trained model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub analysis: AnalysisConfig,
    pub naive_bayes: NaiveBayesConfig,
    pub split: SplitConfig,
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        self.naive_bayes.validate()?;
        self.split.validate()
    }
}

/// Trains fraud models.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn train(&self, dataset: &LabeledDataset) -> Result<FraudModel> {
        self.config.validate()?;

        let texts = dataset.texts();
        let labels = dataset.labels();

        let mut vectorizer = TfIdfVectorizer::new(self.config.analysis.clone())?;
        vectorizer.fit(&texts)?;

        let split = train_test_split(&labels, &self.config.split)?;
        let train_vectors = split
            .train
            .iter()
            .map(|&i| vectorizer.transform(texts[i]))
            .collect::<Result<Vec<_>>>()?;
        let train_labels: Vec<Label> = split.train.iter().map(|&i| labels[i]).collect();

        let classifier = MultinomialNaiveBayes::fit(
            &self.config.naive_bayes,
            &train_vectors,
            &train_labels,
            vectorizer.vocabulary_size(),
        )?;

        log::info!(
            "trained on {} of {} messages ({} held out), vocabulary of {} terms",
            split.train.len(),
            dataset.len(),
            split.test.len(),
            vectorizer.vocabulary_size()
        );

        FraudModel::new(vectorizer, classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmsGuardError;
    use crate::evaluation::dataset::LabeledSample;

    #[test]
    fn test_train_produces_consistent_model() {
        let mut samples = Vec::new();
        for i in 0..10 {
            samples.push(LabeledSample::new(Label::Fraud, format!("claim cash prize {i}")));
            samples.push(LabeledSample::new(Label::Safe, format!("lunch with mum {i}")));
        }
        let dataset = LabeledDataset::new(samples).unwrap();

        let model = Trainer::default().train(&dataset).unwrap();

        assert_eq!(
            model.vectorizer().vocabulary_size(),
            model.classifier().n_features()
        );
        // vectorizer saw all 20, classifier only the 16 training rows
        assert_eq!(model.vectorizer().n_documents(), 20);
        assert_eq!(model.classifier().class_count(), [8, 8]);
        assert_eq!(model.predict("cash prize").unwrap().label, Label::Fraud);
    }

    #[test]
    fn test_single_class_dataset_fails() {
        let samples = (0..5)
            .map(|i| LabeledSample::new(Label::Safe, format!("hello there {i}")))
            .collect();
        let dataset = LabeledDataset::new(samples).unwrap();

        let result = Trainer::default().train(&dataset);
        assert!(matches!(result, Err(SmsGuardError::Model(_))));
    }

    #[test]
    fn test_class_with_one_example_is_trained_on() {
        let mut samples = vec![LabeledSample::new(Label::Safe, "see you at lunch")];
        for i in 0..9 {
            samples.push(LabeledSample::new(Label::Fraud, format!("claim cash prize {i}")));
        }
        let dataset = LabeledDataset::new(samples).unwrap();

        let model = Trainer::default().train(&dataset).unwrap();
        assert_eq!(model.classifier().class_count(), [1, 7]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dataset = LabeledDataset::new(vec![
            LabeledSample::new(Label::Safe, "hello"),
            LabeledSample::new(Label::Fraud, "prize"),
        ])
        .unwrap();
        let config = TrainingConfig {
            naive_bayes: NaiveBayesConfig { alpha: -1.0 },
            ..TrainingConfig::default()
        };
        assert!(Trainer::new(config).train(&dataset).is_err());
    }
}
