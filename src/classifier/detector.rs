//! Fraud detection facade.

use std::sync::Arc;

use rayon::prelude::*;

use crate::classifier::lexicon::RiskLexicon;
use crate::classifier::model::FraudModel;
use crate::classifier::types::{ClassifyRequest, SmsVerdict};
use crate::error::Result;

/// Combines the fitted model with the keyword overlay.
///
/// The detector is cheap to clone and can be shared between threads.
#[derive(Debug, Clone)]
pub struct FraudDetector {
    model: Arc<FraudModel>,
    lexicon: RiskLexicon,
}

impl FraudDetector {
    pub fn new(model: Arc<FraudModel>) -> Self {
        Self::with_lexicon(model, RiskLexicon::standard())
    }

    pub fn with_lexicon(model: Arc<FraudModel>, lexicon: RiskLexicon) -> Self {
        Self { model, lexicon }
    }

    /// Classify one message.
    ///
    /// The verdict comes from the model alone; `risky_words` lists the
    /// lexicon terms found in the message whatever the verdict.
    pub fn classify(&self, message: &str) -> Result<SmsVerdict> {
        let prediction = self.model.predict(message)?;
        Ok(SmsVerdict {
            prediction: prediction.label.verdict().to_string(),
            confidence: prediction.confidence,
            risky_words: self.lexicon.scan(message),
        })
    }

    pub fn classify_request(&self, request: &ClassifyRequest) -> Result<SmsVerdict> {
        self.classify(&request.message)
    }

    /// Classify many messages in parallel. Output order follows input order.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, messages: &[S]) -> Result<Vec<SmsVerdict>> {
        messages
            .par_iter()
            .map(|message| self.classify(message.as_ref()))
            .collect()
    }

    pub fn model(&self) -> &Arc<FraudModel> {
        &self.model
    }

    pub fn lexicon(&self) -> &RiskLexicon {
        &self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::AnalysisConfig;
    use crate::classifier::naive_bayes::{MultinomialNaiveBayes, NaiveBayesConfig};
    use crate::classifier::tfidf::TfIdfVectorizer;
    use crate::classifier::types::{FRAUD_VERDICT, Label, SAFE_VERDICT};

    fn detector() -> FraudDetector {
        let docs = [
            "You won a lottery prize, claim cash reward",
            "Urgent: verify your bank account with OTP",
            "Are we still meeting for lunch tomorrow?",
            "Happy birthday, see you at dinner",
        ];
        let labels = [Label::Fraud, Label::Fraud, Label::Safe, Label::Safe];

        let mut vectorizer = TfIdfVectorizer::new(AnalysisConfig::default()).unwrap();
        let vectors = vectorizer.fit_transform(&docs).unwrap();
        let classifier = MultinomialNaiveBayes::fit(
            &NaiveBayesConfig::default(),
            &vectors,
            &labels,
            vectorizer.vocabulary_size(),
        )
        .unwrap();
        FraudDetector::new(Arc::new(FraudModel::new(vectorizer, classifier).unwrap()))
    }

    #[test]
    fn test_classify_fraud() {
        let verdict = detector().classify("Claim your lottery prize now").unwrap();
        assert_eq!(verdict.prediction, FRAUD_VERDICT);
        assert!(verdict.confidence > 50.0 && verdict.confidence <= 100.0);
        assert_eq!(verdict.risky_words, vec!["now", "prize", "lottery", "claim"]);
    }

    #[test]
    fn test_classify_safe() {
        let verdict = detector().classify("lunch tomorrow?").unwrap();
        assert_eq!(verdict.prediction, SAFE_VERDICT);
        assert!(verdict.risky_words.is_empty());
    }

    #[test]
    fn test_empty_message_is_safe_on_balanced_model() {
        let verdict = detector().classify("").unwrap();
        assert_eq!(verdict.prediction, SAFE_VERDICT);
        assert_eq!(verdict.confidence, 50.0);
        assert!(verdict.risky_words.is_empty());
    }

    #[test]
    fn test_classify_request_without_message() {
        let request: ClassifyRequest = serde_json::from_str("{}").unwrap();
        let verdict = detector().classify_request(&request).unwrap();
        assert_eq!(verdict.prediction, SAFE_VERDICT);
    }

    #[test]
    fn test_batch_matches_single() {
        let detector = detector();
        let messages = ["verify your otp", "dinner tomorrow", ""];
        let batch = detector.classify_batch(&messages).unwrap();
        let single: Vec<_> = messages
            .iter()
            .map(|m| detector.classify(m).unwrap())
            .collect();
        assert_eq!(batch, single);
    }
}
