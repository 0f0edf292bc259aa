//! Labeled SMS datasets.
//!
//! Datasets come from CSV files with a header row. The label column holds
//! `spam`/`ham` or `1`/`0` (case and surrounding whitespace ignored); rows
//! whose label cannot be parsed, or whose text is blank, are dropped and
//! counted in [`CleaningStats`].
//!
//! ```csv
//! target,text
//! spam,WINNER!! Claim your prize now
//! ham,See you at lunch
//! ```

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::classifier::Label;
use crate::error::{Result, SmsGuardError};

/// CSV layout of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Header of the label column.
    pub label_column: String,
    /// Header of the message column.
    pub text_column: String,
    /// Field delimiter.
    pub delimiter: char,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            label_column: "target".to_string(),
            text_column: "text".to_string(),
            delimiter: ',',
        }
    }
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(SmsGuardError::invalid_config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }
        if self.label_column == self.text_column {
            return Err(SmsGuardError::invalid_config(
                "label and text columns must differ",
            ));
        }
        Ok(())
    }
}

/// One cleaned row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub label: Label,
    pub text: String,
}

impl LabeledSample {
    pub fn new<S: Into<String>>(label: Label, text: S) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// What cleaning did to the raw rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStats {
    pub rows_read: usize,
    pub dropped_label: usize,
    pub dropped_empty_text: usize,
}

impl CleaningStats {
    pub fn kept(&self) -> usize {
        self.rows_read - self.dropped_label - self.dropped_empty_text
    }
}

/// A cleaned, non-empty dataset.
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    samples: Vec<LabeledSample>,
    stats: CleaningStats,
}

impl LabeledDataset {
    /// Build from already-labeled samples, dropping those with blank text.
    pub fn new(samples: Vec<LabeledSample>) -> Result<Self> {
        let mut stats = CleaningStats {
            rows_read: samples.len(),
            ..CleaningStats::default()
        };

        let mut kept = Vec::with_capacity(samples.len());
        for (row, sample) in samples.into_iter().enumerate() {
            if sample.text.trim().is_empty() {
                log::debug!("row {row}: dropping empty text");
                stats.dropped_empty_text += 1;
                continue;
            }
            kept.push(sample);
        }

        Self::with_stats(kept, stats)
    }

    fn with_stats(samples: Vec<LabeledSample>, stats: CleaningStats) -> Result<Self> {
        if samples.is_empty() {
            return Err(SmsGuardError::dataset(format!(
                "no usable rows after cleaning ({} read, {} bad labels, {} empty texts)",
                stats.rows_read, stats.dropped_label, stats.dropped_empty_text
            )));
        }
        Ok(Self { samples, stats })
    }

    /// Clean `(raw label, text)` pairs.
    pub fn from_raw_records<I, L, T>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, T)>,
        L: AsRef<str>,
        T: Into<String>,
    {
        let mut stats = CleaningStats::default();
        let mut samples = Vec::new();

        for (row, (raw_label, text)) in records.into_iter().enumerate() {
            stats.rows_read += 1;

            let Some(label) = Label::parse_raw(raw_label.as_ref()) else {
                log::debug!("row {row}: dropping unrecognized label {:?}", raw_label.as_ref());
                stats.dropped_label += 1;
                continue;
            };

            let text = text.into();
            if text.trim().is_empty() {
                log::debug!("row {row}: dropping empty text");
                stats.dropped_empty_text += 1;
                continue;
            }

            samples.push(LabeledSample { label, text });
        }

        Self::with_stats(samples, stats)
    }

    /// Read and clean a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, config: &DatasetConfig) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let dataset = Self::from_csv_reader(file, config)?;
        log::info!(
            "loaded {} samples from {} ({} rows dropped)",
            dataset.len(),
            path.as_ref().display(),
            dataset.stats.rows_read - dataset.len()
        );
        Ok(dataset)
    }

    /// Read and clean CSV data from any reader.
    pub fn from_csv_reader<R: Read>(reader: R, config: &DatasetConfig) -> Result<Self> {
        config.validate()?;

        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter as u8)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| SmsGuardError::dataset(format!("missing column {name:?}")))
        };
        let label_idx = column(&config.label_column)?;
        let text_idx = column(&config.text_column)?;

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            records.push((
                record.get(label_idx).unwrap_or_default().to_string(),
                record.get(text_idx).unwrap_or_default().to_string(),
            ));
        }

        Self::from_raw_records(records)
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn stats(&self) -> CleaningStats {
        self.stats
    }

    pub fn texts(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<Label> {
        self.samples.iter().map(|s| s.label).collect()
    }

    /// Documents per class, indexed by [`Label::index`].
    pub fn class_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for sample in &self.samples {
            counts[sample.label.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_records_cleans_rows() {
        let dataset = LabeledDataset::from_raw_records(vec![
            ("spam", "Win cash"),
            (" HAM ", "See you"),
            ("1", "Verify OTP"),
            ("0", "   "),
            ("unknown", "whatever"),
            ("", "no label"),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.labels(),
            vec![Label::Fraud, Label::Safe, Label::Fraud]
        );
        assert_eq!(
            dataset.stats(),
            CleaningStats {
                rows_read: 6,
                dropped_label: 2,
                dropped_empty_text: 1,
            }
        );
        assert_eq!(dataset.stats().kept(), 3);
        assert_eq!(dataset.class_counts(), [1, 2]);
    }

    #[test]
    fn test_new_drops_blank_samples() {
        let dataset = LabeledDataset::new(vec![
            LabeledSample::new(Label::Safe, ""),
            LabeledSample::new(Label::Fraud, "   "),
            LabeledSample::new(Label::Safe, "hello"),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.samples()[0].text, "hello");
        assert_eq!(
            dataset.stats(),
            CleaningStats {
                rows_read: 3,
                dropped_label: 0,
                dropped_empty_text: 2,
            }
        );

        let blank_only = LabeledDataset::new(vec![LabeledSample::new(Label::Fraud, "\t\n")]);
        assert!(matches!(blank_only, Err(SmsGuardError::Dataset(_))));
    }

    #[test]
    fn test_empty_after_cleaning_is_an_error() {
        let result = LabeledDataset::from_raw_records(vec![("spam?", "text"), ("ham", "")]);
        assert!(matches!(result, Err(SmsGuardError::Dataset(_))));
    }

    #[test]
    fn test_from_csv_reader() {
        let csv = "text,target\n\"Claim your prize, now\",spam\nLunch at 1?,ham\n";
        let dataset = LabeledDataset::from_csv_reader(csv.as_bytes(), &DatasetConfig::default())
            .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.samples()[0].text, "Claim your prize, now");
        assert_eq!(dataset.samples()[0].label, Label::Fraud);
    }

    #[test]
    fn test_missing_column() {
        let csv = "label,message\nspam,hello\n";
        let result = LabeledDataset::from_csv_reader(csv.as_bytes(), &DatasetConfig::default());
        assert!(matches!(result, Err(SmsGuardError::Dataset(_))));
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let config = DatasetConfig {
            label_column: "v1".to_string(),
            text_column: "v2".to_string(),
            delimiter: ';',
        };
        let csv = "v1;v2\nham;ok then\nspam;free entry\n";
        let dataset = LabeledDataset::from_csv_reader(csv.as_bytes(), &config).unwrap();
        assert_eq!(dataset.labels(), vec![Label::Safe, Label::Fraud]);
    }

    #[test]
    fn test_short_rows_count_as_dropped() {
        let csv = "target,text\nspam\nham,hello\n";
        let dataset =
            LabeledDataset::from_csv_reader(csv.as_bytes(), &DatasetConfig::default()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.stats().dropped_empty_text, 1);
    }
}
