//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::{RiskTerm, SmsVerdict};
use crate::cli::args::{OutputFormat, SmsGuardArgs};
use crate::error::Result;
use crate::evaluation::{CleaningStats, EvaluationReport};

/// Human-readable rendering of a command result.
pub trait HumanReadable {
    fn render_human(&self) -> String;
}

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_path: String,
    pub cleaning: CleaningStats,
    pub vocabulary_size: usize,
    pub class_counts: [usize; 2],
    pub duration_ms: u64,
}

/// Result structure for scanning.
#[derive(Debug, Serialize)]
pub struct ScanResult {
    pub risky_words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<RiskTerm>>,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SmsGuardArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            print!("{}", result.render_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SmsGuardArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn render_words(words: &[String]) -> String {
    if words.is_empty() {
        "(none)".to_string()
    } else {
        words.join(", ")
    }
}

impl HumanReadable for SmsVerdict {
    fn render_human(&self) -> String {
        format!(
            "Prediction:  {}\nConfidence:  {:.2}%\nRisk level:  {}\nRisky words: {}\n",
            self.prediction,
            self.confidence,
            self.risk_level(),
            render_words(&self.risky_words)
        )
    }
}

impl HumanReadable for ScanResult {
    fn render_human(&self) -> String {
        match &self.categories {
            Some(terms) if !terms.is_empty() => terms
                .iter()
                .map(|term| format!("{:<16} {}\n", term.term, term.category))
                .collect(),
            _ => format!("Risky words: {}\n", render_words(&self.risky_words)),
        }
    }
}

impl HumanReadable for EvaluationReport {
    fn render_human(&self) -> String {
        let matrix = &self.confusion_matrix;
        let row = |label: &str, predicted_safe: usize, predicted_fraud: usize| {
            format!("{label:>16} {predicted_safe:>8} {predicted_fraud:>8}\n")
        };

        let mut out = format!("Accuracy: {:.2}%\n\n", self.accuracy);
        out.push_str("Confusion matrix (rows = actual, columns = predicted):\n");
        out.push_str(&format!("{:>16} {:>8} {:>8}\n", "", "safe", "fraud"));
        out.push_str(&row(
            self.labels[0].as_str(),
            matrix.true_negatives(),
            matrix.false_positives(),
        ));
        out.push_str(&row(
            self.labels[1].as_str(),
            matrix.false_negatives(),
            matrix.true_positives(),
        ));
        out.push_str(&format!(
            "\nFraud precision: {:.2}%\nFraud recall:    {:.2}%\nFraud F1:        {:.2}%\n",
            matrix.precision() * 100.0,
            matrix.recall() * 100.0,
            matrix.f1() * 100.0
        ));
        out
    }
}

impl HumanReadable for TrainingResult {
    fn render_human(&self) -> String {
        format!(
            "Model written to {}\n\
             Rows read: {} (dropped: {} bad label, {} empty text)\n\
             Classes: {} safe, {} fraud\n\
             Vocabulary: {} terms\n\
             Took {} ms\n",
            self.model_path,
            self.cleaning.rows_read,
            self.cleaning.dropped_label,
            self.cleaning.dropped_empty_text,
            self.class_counts[0],
            self.class_counts[1],
            self.vocabulary_size,
            self.duration_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Label, RiskLexicon};
    use crate::evaluation::ConfusionMatrix;

    #[test]
    fn test_verdict_human_output() {
        let verdict = SmsVerdict {
            prediction: "SAFE SMS".to_string(),
            confidence: 97.5,
            risky_words: vec![],
        };
        let text = verdict.render_human();
        assert!(text.contains("SAFE SMS"));
        assert!(text.contains("97.50%"));
        assert!(text.contains("LOW RISK"));
        assert!(text.contains("(none)"));
    }

    #[test]
    fn test_report_human_output() {
        let matrix = ConfusionMatrix::from_pairs([
            (Label::Safe, Label::Safe),
            (Label::Fraud, Label::Fraud),
            (Label::Fraud, Label::Safe),
        ]);
        let report = EvaluationReport::from_matrix(matrix);
        let text = report.render_human();
        assert!(text.contains("Accuracy: 66.67%"));
        assert!(text.contains("Fraud precision: 100.00%"));
        assert!(text.contains("Fraud recall:    50.00%"));
    }

    #[test]
    fn test_training_human_output() {
        let result = TrainingResult {
            model_path: "model.json".to_string(),
            cleaning: CleaningStats {
                rows_read: 12,
                dropped_label: 1,
                dropped_empty_text: 1,
            },
            vocabulary_size: 40,
            class_counts: [6, 4],
            duration_ms: 3,
        };
        let text = result.render_human();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Model written to model.json",
                "Rows read: 12 (dropped: 1 bad label, 1 empty text)",
                "Classes: 6 safe, 4 fraud",
                "Vocabulary: 40 terms",
                "Took 3 ms",
            ]
        );
    }

    #[test]
    fn test_scan_categories_output() {
        let lexicon = RiskLexicon::standard();
        let result = ScanResult {
            risky_words: lexicon.scan("court notice"),
            categories: Some(lexicon.scan_categorized("court notice")),
        };
        let text = result.render_human();
        assert!(text.contains("legal-threat"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["categories"][0]["term"], "notice");
        assert_eq!(json["categories"][0]["category"], "legal-threat");
    }
}
