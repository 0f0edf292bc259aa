//! Crate-wide configuration.
//!
//! All sections are optional in the JSON file; missing ones take their
//! defaults.
//!
//! ```json
//! {
//!   "naive_bayes": { "alpha": 0.5 },
//!   "dataset": { "label_column": "v1", "text_column": "v2" },
//!   "split": { "test_fraction": 0.25, "seed": 7 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalysisConfig;
use crate::classifier::NaiveBayesConfig;
use crate::error::Result;
use crate::evaluation::{DatasetConfig, SplitConfig, TrainingConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsGuardConfig {
    pub analysis: AnalysisConfig,
    pub naive_bayes: NaiveBayesConfig,
    pub dataset: DatasetConfig,
    pub split: SplitConfig,
}

impl SmsGuardConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: SmsGuardConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.naive_bayes.validate()?;
        self.dataset.validate()?;
        self.split.validate()
    }

    /// The subset of settings that shapes a trained model.
    pub fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            analysis: self.analysis.clone(),
            naive_bayes: self.naive_bayes.clone(),
            split: self.split.clone(),
        }
    }
}
