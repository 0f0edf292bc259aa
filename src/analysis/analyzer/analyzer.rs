//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer and a chain of filters to turn a raw
//! message into the terms the feature extractor counts:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → TF-IDF counts
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1..N
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analyzers are shared read-only between threads once built, hence the
/// `Send + Sync` bound.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use smsguard::analysis::analyzer::Analyzer;
    /// use smsguard::analysis::analyzer::StandardAnalyzer;
    ///
    /// let analyzer = StandardAnalyzer::new().unwrap();
    /// let tokens: Vec<_> = analyzer.analyze("Claim your FREE prize").unwrap().collect();
    ///
    /// // "your" is a stop word, everything else is lowercased
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[1].text, "free");
    /// ```
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Convenience wrapper collecting the token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
