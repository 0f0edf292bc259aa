//! Standard analyzer used for SMS text.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (`\b\w\w+\b`: two or more word characters)
//! 2. LowercaseFilter
//! 3. StopFilter (English stop words)
//!
//! The pipeline is described by an [`AnalysisConfig`], which is persisted
//! together with a fitted vocabulary so a loaded model tokenizes exactly as
//! it did during training.
//!
//! # Examples
//!
//! ```
//! use smsguard::analysis::analyzer::Analyzer;
//! use smsguard::analysis::analyzer::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms = analyzer.terms("Your OTP is 4821, do not share it").unwrap();
//!
//! assert_eq!(terms, vec!["otp", "4821", "share"]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::{DEFAULT_TOKEN_PATTERN, RegexTokenizer};
use crate::error::Result;

/// Which stop-word list the analyzer removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// The built-in English list.
    English,
    /// Keep every token.
    None,
    /// A caller-supplied list (compared after lowercasing).
    Custom(Vec<String>),
}

/// Configuration of the text analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Regex whose matches become tokens.
    pub token_pattern: String,
    /// Lowercase tokens before stop-word removal.
    pub lowercase: bool,
    /// Stop words to drop.
    pub stop_words: StopWords,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            lowercase: true,
            stop_words: StopWords::English,
        }
    }
}

/// The analyzer used by the feature extractor.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
    config: AnalysisConfig,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(AnalysisConfig::default())
    }

    /// Build the pipeline described by `config`.
    pub fn from_config(config: AnalysisConfig) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::with_pattern(&config.token_pattern)?);
        let mut pipeline = PipelineAnalyzer::new(tokenizer);

        if config.lowercase {
            pipeline = pipeline.add_filter(Arc::new(LowercaseFilter::new()));
        }
        match &config.stop_words {
            StopWords::English => {
                pipeline = pipeline.add_filter(Arc::new(StopFilter::new()));
            }
            StopWords::Custom(words) => {
                let words = words.iter().map(|w| w.to_lowercase());
                pipeline = pipeline.add_filter(Arc::new(StopFilter::from_words(words)));
            }
            StopWords::None => {}
        }

        Ok(StandardAnalyzer {
            inner: pipeline.with_name("standard"),
            config,
        })
    }

    /// Get the configuration this analyzer was built from.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let terms = analyzer.terms("URGENT: your account is BLOCKED").unwrap();

        assert_eq!(terms, vec!["urgent", "account", "blocked"]);
    }

    #[test]
    fn test_terms_never_contain_stop_words() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let terms = analyzer
            .terms("The bank will call you NOW about the refund and your card")
            .unwrap();

        assert_eq!(terms, vec!["bank", "refund", "card"]);
        let stop = StopFilter::new();
        assert!(terms.iter().all(|t| !stop.is_stop_word(t)));
    }

    #[test]
    fn test_empty_input() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert!(analyzer.terms("").unwrap().is_empty());
    }

    #[test]
    fn test_without_stop_words() {
        let config = AnalysisConfig {
            stop_words: StopWords::None,
            ..AnalysisConfig::default()
        };
        let analyzer = StandardAnalyzer::from_config(config).unwrap();

        let terms = analyzer.terms("Call me now").unwrap();
        assert_eq!(terms, vec!["call", "me", "now"]);
    }

    #[test]
    fn test_custom_stop_words_are_lowercased() {
        let config = AnalysisConfig {
            stop_words: StopWords::Custom(vec!["Dear".to_string()]),
            ..AnalysisConfig::default()
        };
        let analyzer = StandardAnalyzer::from_config(config).unwrap();

        let terms = analyzer.terms("Dear customer").unwrap();
        assert_eq!(terms, vec!["customer"]);
    }

    #[test]
    fn test_config_roundtrip_through_json() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
