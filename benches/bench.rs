//! Criterion benchmarks for smsguard.
//!
//! - Text analysis
//! - TF-IDF fitting and transformation
//! - Single and batch classification

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use smsguard::analysis::analyzer::{AnalysisConfig, Analyzer, StandardAnalyzer};
use smsguard::classifier::{FraudDetector, Label, TfIdfVectorizer};
use smsguard::evaluation::{LabeledDataset, LabeledSample, Trainer};

/// Generate labeled messages for benchmarking.
fn generate_messages(count: usize) -> Vec<LabeledSample> {
    let fraud_words = [
        "urgent", "claim", "prize", "cash", "winner", "verify", "account", "otp", "link",
        "click", "reward", "lottery", "blocked", "kyc",
    ];
    let safe_words = [
        "lunch", "dinner", "meeting", "tomorrow", "home", "movie", "class", "thanks",
        "weekend", "coffee", "office", "family", "trip", "game",
    ];

    (0..count)
        .map(|i| {
            let (label, words) = if i % 2 == 0 {
                (Label::Fraud, &fraud_words)
            } else {
                (Label::Safe, &safe_words)
            };
            let length = 5 + (i % 10);
            let text: Vec<&str> = (0..length)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect();
            LabeledSample::new(label, text.join(" "))
        })
        .collect()
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let analyzer = StandardAnalyzer::new().unwrap();
    let message = "URGENT: your account is blocked, verify your OTP at the link now";

    group.bench_function("analyze_message", |b| {
        b.iter(|| black_box(analyzer.terms(black_box(message)).unwrap()))
    });

    group.finish();
}

fn bench_tfidf(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfidf");
    let samples = generate_messages(1000);
    let texts: Vec<&str> = samples.iter().map(|s| s.text.as_str()).collect();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("fit_1000", |b| {
        b.iter(|| {
            let mut vectorizer = TfIdfVectorizer::new(AnalysisConfig::default()).unwrap();
            vectorizer.fit(black_box(&texts)).unwrap();
            black_box(vectorizer)
        })
    });

    let mut vectorizer = TfIdfVectorizer::new(AnalysisConfig::default()).unwrap();
    vectorizer.fit(&texts).unwrap();
    group.throughput(Throughput::Elements(1));
    group.bench_function("transform", |b| {
        b.iter(|| black_box(vectorizer.transform(black_box(texts[0])).unwrap()))
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let dataset = LabeledDataset::new(generate_messages(1000)).unwrap();
    let model = Trainer::default().train(&dataset).unwrap();
    let detector = FraudDetector::new(Arc::new(model));
    let messages: Vec<&str> = dataset.texts();

    group.bench_function("classify_single", |b| {
        b.iter(|| black_box(detector.classify(black_box(messages[0])).unwrap()))
    });

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("classify_batch_1000", |b| {
        b.iter(|| black_box(detector.classify_batch(black_box(&messages)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_tfidf, bench_classify);
criterion_main!(benches);
