//! Command line argument parsing for the smsguard CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// smsguard - fraud SMS detection
#[derive(Parser, Debug, Clone)]
#[command(name = "smsguard")]
#[command(about = "Classify SMS messages as fraud or safe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SmsGuardArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "SMSGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SmsGuardArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from a labeled CSV dataset
    Train(TrainArgs),

    /// Classify a message with a trained model
    Classify(ClassifyArgs),

    /// List risk keywords in a message (no model needed)
    Scan(ScanArgs),

    /// Evaluate a trained model on the held-out split of a dataset
    Evaluate(EvaluateArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Labeled CSV dataset
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Where to write the model artifact
    #[arg(short, long, value_name = "MODEL")]
    pub output: PathBuf,

    /// Additive smoothing (overrides the config file)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Held-out fraction (overrides the config file)
    #[arg(long)]
    pub test_fraction: Option<f64>,

    /// Split seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for classifying
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Model artifact written by `train`
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Message text (empty when omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,
}

/// Arguments for scanning
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// Message text (empty when omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Show the category of each term
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for evaluating
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Model artifact written by `train`
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Labeled CSV dataset
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Held-out fraction (overrides the config file)
    #[arg(long)]
    pub test_fraction: Option<f64>,

    /// Split seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let args =
            SmsGuardArgs::try_parse_from(["smsguard", "-f", "json", "classify", "m.json", "hi"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.model, PathBuf::from("m.json"));
                assert_eq!(classify.message.as_deref(), Some("hi"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_missing_message_is_allowed() {
        let args = SmsGuardArgs::try_parse_from(["smsguard", "scan"]).unwrap();
        match args.command {
            Command::Scan(scan) => assert!(scan.message.is_none()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = SmsGuardArgs::try_parse_from(["smsguard", "-vv", "scan"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SmsGuardArgs::try_parse_from(["smsguard", "-q", "-vv", "scan"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = SmsGuardArgs::try_parse_from(["smsguard", "scan"]).unwrap();
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_train_requires_output() {
        assert!(SmsGuardArgs::try_parse_from(["smsguard", "train", "data.csv"]).is_err());
        let args =
            SmsGuardArgs::try_parse_from(["smsguard", "train", "data.csv", "-o", "m.json", "--seed", "9"])
                .unwrap();
        match args.command {
            Command::Train(train) => assert_eq!(train.seed, Some(9)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
