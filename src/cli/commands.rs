//! Command implementations for the smsguard CLI.

use std::sync::Arc;
use std::time::Instant;

use crate::classifier::{FraudDetector, FraudModel, RiskLexicon};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SmsGuardConfig;
use crate::error::Result;
use crate::evaluation::{Evaluator, LabeledDataset, Trainer};

/// Execute a CLI command.
pub fn execute_command(args: SmsGuardArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Train(train_args) => train(train_args, config, &args),
        Command::Classify(classify_args) => classify(classify_args, &args),
        Command::Scan(scan_args) => scan(scan_args, &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, config, &args),
    }
}

fn load_config(args: &SmsGuardArgs) -> Result<SmsGuardConfig> {
    match &args.config {
        Some(path) => SmsGuardConfig::from_file(path),
        None => Ok(SmsGuardConfig::default()),
    }
}

/// Train a model and write the artifact.
fn train(args: &TrainArgs, mut config: SmsGuardConfig, cli_args: &SmsGuardArgs) -> Result<()> {
    if let Some(alpha) = args.alpha {
        config.naive_bayes.alpha = alpha;
    }
    if let Some(fraction) = args.test_fraction {
        config.split.test_fraction = fraction;
    }
    if let Some(seed) = args.seed {
        config.split.seed = seed;
    }
    config.validate()?;

    let start_time = Instant::now();

    let dataset = LabeledDataset::from_csv_path(&args.dataset, &config.dataset)?;
    let model = Trainer::new(config.training_config()).train(&dataset)?;
    model.save(&args.output)?;

    let result = TrainingResult {
        model_path: args.output.display().to_string(),
        cleaning: dataset.stats(),
        vocabulary_size: model.vectorizer().vocabulary_size(),
        class_counts: dataset.class_counts(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    output_result("Model trained successfully", &result, cli_args)
}

/// Classify one message.
fn classify(args: &ClassifyArgs, cli_args: &SmsGuardArgs) -> Result<()> {
    let model = FraudModel::load(&args.model)?;
    let detector = FraudDetector::new(Arc::new(model));

    let message = args.message.as_deref().unwrap_or_default();
    let verdict = detector.classify(message)?;

    output_result("Classification", &verdict, cli_args)
}

/// Keyword overlay only.
fn scan(args: &ScanArgs, cli_args: &SmsGuardArgs) -> Result<()> {
    let lexicon = RiskLexicon::standard();
    let message = args.message.as_deref().unwrap_or_default();

    let result = ScanResult {
        risky_words: lexicon.scan(message),
        categories: args
            .categories
            .then(|| lexicon.scan_categorized(message)),
    };

    output_result("Risk keywords", &result, cli_args)
}

/// Evaluate a saved model on the held-out split.
fn evaluate(args: &EvaluateArgs, mut config: SmsGuardConfig, cli_args: &SmsGuardArgs) -> Result<()> {
    if let Some(fraction) = args.test_fraction {
        config.split.test_fraction = fraction;
    }
    if let Some(seed) = args.seed {
        config.split.seed = seed;
    }
    config.validate()?;

    let model = FraudModel::load(&args.model)?;
    let dataset = LabeledDataset::from_csv_path(&args.dataset, &config.dataset)?;
    let report = Evaluator::new(config.split).evaluate(&model, &dataset)?;

    output_result("Evaluation report", &report, cli_args)
}
