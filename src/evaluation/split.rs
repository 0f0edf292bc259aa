//! Deterministic train/test partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::classifier::Label;
use crate::error::{Result, SmsGuardError};

/// Split settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Share of the dataset held out for testing, in (0, 1).
    pub test_fraction: f64,
    /// Seed of the shuffling RNG.
    pub seed: u64,
    /// Keep the class balance of the whole dataset in both halves.
    pub stratify: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            stratify: true,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(SmsGuardError::invalid_config(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        Ok(())
    }
}

/// Row indices of each half, both sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Partition `labels` into train and test rows.
///
/// The same labels, seed and fraction always give the same partition. A
/// group (each class when stratifying, otherwise the whole set) with two or
/// more rows contributes at least one test row and at least one training
/// row. A group with a single row stays on the training side, so a class
/// seen only once can still be learned; it is then absent from the test
/// half.
pub fn train_test_split(labels: &[Label], config: &SplitConfig) -> Result<TrainTestSplit> {
    config.validate()?;
    if labels.is_empty() {
        return Err(SmsGuardError::dataset("cannot split an empty dataset"));
    }

    let groups: Vec<Vec<usize>> = if config.stratify {
        Label::ALL
            .iter()
            .map(|label| {
                labels
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| *l == label)
                    .map(|(i, _)| i)
                    .collect::<Vec<usize>>()
            })
            .filter(|group| !group.is_empty())
            .collect()
    } else {
        vec![(0..labels.len()).collect()]
    };

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut train = Vec::with_capacity(labels.len());
    let mut test = Vec::new();

    for mut group in groups {
        group.shuffle(&mut rng);
        let n_test = test_size(group.len(), config.test_fraction);
        test.extend_from_slice(&group[..n_test]);
        train.extend_from_slice(&group[n_test..]);
    }

    train.sort_unstable();
    test.sort_unstable();

    log::debug!(
        "split {} rows into {} train / {} test (seed {})",
        labels.len(),
        train.len(),
        test.len(),
        config.seed
    );

    Ok(TrainTestSplit { train, test })
}

fn test_size(group_len: usize, fraction: f64) -> usize {
    if group_len < 2 {
        return 0;
    }
    let wanted = (group_len as f64 * fraction).round() as usize;
    wanted.clamp(1, group_len - 1)
}
