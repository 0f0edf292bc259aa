//! The fitted extractor/classifier pair.
//!
//! A [`FraudModel`] is the only way to use a [`MultinomialNaiveBayes`]: the
//! pair is assembled, saved and loaded as one unit, and the classifier's
//! feature dimension must equal the vectorizer's vocabulary size.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::classifier::TextClassifier;
use crate::classifier::naive_bayes::MultinomialNaiveBayes;
use crate::classifier::tfidf::{TfIdfVectorizer, VectorizerArtifact};
use crate::classifier::types::Prediction;
use crate::error::{Result, SmsGuardError};

/// Version written into saved artifacts.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Immutable TF-IDF + Naive Bayes pair.
#[derive(Debug)]
pub struct FraudModel {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNaiveBayes,
}

#[derive(Serialize, Deserialize)]
struct ModelArtifact {
    format_version: u32,
    vectorizer: VectorizerArtifact,
    classifier: MultinomialNaiveBayes,
}

impl FraudModel {
    /// Pair a fitted vectorizer with a classifier trained on its vectors.
    pub fn new(vectorizer: TfIdfVectorizer, classifier: MultinomialNaiveBayes) -> Result<Self> {
        if vectorizer.vocabulary_size() != classifier.n_features() {
            return Err(SmsGuardError::model(format!(
                "vocabulary mismatch: vectorizer has {} terms, classifier expects {}",
                vectorizer.vocabulary_size(),
                classifier.n_features()
            )));
        }
        classifier.validate()?;
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Vectorize and classify one message.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let vector = self.vectorizer.transform(text)?;
        self.classifier.predict_with_confidence(&vector)
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &MultinomialNaiveBayes {
        &self.classifier
    }

    /// Write the model as a JSON artifact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let artifact = ModelArtifact {
            format_version: MODEL_FORMAT_VERSION,
            vectorizer: self.vectorizer.to_artifact(),
            classifier: self.classifier.clone(),
        };

        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer(&mut writer, &artifact)?;
        writer.flush()?;

        log::info!(
            "saved model ({} terms) to {}",
            self.vectorizer.vocabulary_size(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Read a JSON artifact written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let artifact: ModelArtifact = serde_json::from_reader(reader)?;

        if artifact.format_version != MODEL_FORMAT_VERSION {
            return Err(SmsGuardError::model(format!(
                "unsupported model format version {} (expected {})",
                artifact.format_version, MODEL_FORMAT_VERSION
            )));
        }

        let vectorizer = TfIdfVectorizer::from_artifact(artifact.vectorizer)?;
        let model = Self::new(vectorizer, artifact.classifier)?;

        log::debug!(
            "loaded model ({} terms) from {}",
            model.vectorizer.vocabulary_size(),
            path.as_ref().display()
        );
        Ok(model)
    }
}

impl TextClassifier for FraudModel {
    fn predict(&self, text: &str) -> Result<Prediction> {
        FraudModel::predict(self, text)
    }

    fn name(&self) -> &str {
        "tfidf_naive_bayes"
    }
}
