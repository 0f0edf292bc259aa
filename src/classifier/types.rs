//! Common types for fraud classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict text reported for fraudulent messages.
pub const FRAUD_VERDICT: &str = "FRAUD SMS";

/// Verdict text reported for safe messages.
pub const SAFE_VERDICT: &str = "SAFE SMS";

/// Binary message class.
///
/// The discriminants match the numeric labels used in datasets
/// (`0 = ham/safe`, `1 = spam/fraud`) and index every per-class array in
/// the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate message ("ham").
    Safe = 0,
    /// Fraudulent message ("spam").
    Fraud = 1,
}

impl Label {
    /// Both labels in index order.
    pub const ALL: [Label; 2] = [Label::Safe, Label::Fraud];

    /// Array index of this label.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Normalize a raw dataset label.
    ///
    /// Accepts `spam`, `ham`, `1` and `0`, ignoring case and surrounding
    /// whitespace. Anything else yields `None`.
    ///
    /// ```
    /// use smsguard::classifier::Label;
    ///
    /// assert_eq!(Label::parse_raw(" SPAM "), Some(Label::Fraud));
    /// assert_eq!(Label::parse_raw("0"), Some(Label::Safe));
    /// assert_eq!(Label::parse_raw("maybe"), None);
    /// ```
    pub fn parse_raw(raw: &str) -> Option<Label> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "spam" | "1" => Some(Label::Fraud),
            "ham" | "0" => Some(Label::Safe),
            _ => None,
        }
    }

    /// Human-facing verdict text.
    pub fn verdict(self) -> &'static str {
        match self {
            Label::Safe => SAFE_VERDICT,
            Label::Fraud => FRAUD_VERDICT,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Safe => write!(f, "safe"),
            Label::Fraud => write!(f, "fraud"),
        }
    }
}

/// Output of the probabilistic classifier for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning class.
    pub label: Label,
    /// Posterior probabilities indexed by [`Label::index`].
    pub probabilities: [f64; 2],
    /// Winning posterior as a percentage, rounded to 2 decimals.
    pub confidence: f64,
}

impl Prediction {
    /// Probability assigned to `label`.
    pub fn probability(&self, label: Label) -> f64 {
        self.probabilities[label.index()]
    }
}

/// Classification request as received from a transport layer.
///
/// A missing `message` is read as the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub message: String,
}

/// Result returned to callers of [`FraudDetector::classify`](super::FraudDetector::classify).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsVerdict {
    /// `"FRAUD SMS"` or `"SAFE SMS"`.
    pub prediction: String,
    /// Confidence of the winning class in percent (0-100, 2 decimals).
    pub confidence: f64,
    /// Lexicon terms found in the message, in lexicon order.
    ///
    /// Matching is by substring, so "win" is reported for "winter".
    pub risky_words: Vec<String>,
}

impl SmsVerdict {
    /// Label behind the verdict text.
    pub fn label(&self) -> Label {
        if self.prediction == FRAUD_VERDICT {
            Label::Fraud
        } else {
            Label::Safe
        }
    }

    /// Coarse risk level for display.
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_verdict(self.label(), self.confidence)
    }
}

/// Display-oriented risk bucket derived from a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Low only for confident safe verdicts; any verdict above 60% is
    /// Medium; everything else is High.
    pub fn from_verdict(label: Label, confidence: f64) -> Self {
        if label == Label::Safe && confidence >= 95.0 {
            RiskLevel::Low
        } else if confidence > 60.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW RISK"),
            RiskLevel::Medium => write!(f, "MEDIUM RISK"),
            RiskLevel::High => write!(f, "HIGH RISK"),
        }
    }
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
