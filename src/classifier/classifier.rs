//! Text classifier trait definition.

use crate::classifier::types::Prediction;
use crate::error::Result;

/// Text classifier trait.
///
/// Implementations take a raw message and return the winning class with its
/// posterior probabilities. The evaluator is generic over this trait.
pub trait TextClassifier: Send + Sync {
    /// Predict the class of a raw message.
    fn predict(&self, text: &str) -> Result<Prediction>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
