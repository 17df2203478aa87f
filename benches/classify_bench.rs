//! Performance benchmarks for the deterministic answer paths.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Theme classification at various question lengths
//! - The quality filter on short and truncated answers
//! - Deterministic answers built from the sample corpus

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lucerna::content::classify_tema;
use lucerna::corpus::Corpus;
use lucerna::filter::quality_filter;
use lucerna::ops::build_supervised_answer;
use std::path::PathBuf;

/// Benchmark classification with questions that hit early, late, or never.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let padding = "oggi il cammino mi sembra lungo e non so dove andare ".repeat(20);
    let questions = vec![
        ("early_hit", "Ho tanta paura per il futuro".to_string()),
        ("late_hit", format!("{} e sento una chiamata", padding)),
        ("no_hit", padding.clone()),
    ];

    for (name, question) in questions {
        group.throughput(Throughput::Bytes(question.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &question, |b, question| {
            b.iter(|| black_box(classify_tema(black_box(question))));
        });
    }

    group.finish();
}

/// Benchmark the quality filter on a short answer and on one that needs truncation.
fn bench_quality_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("quality_filter");

    let inputs = vec![
        ("short", "Dio ti aiuta: non sei solo nella paura.".to_string()),
        ("long", "Il Signore cammina con te nel silenzio. ".repeat(60)),
    ];

    for (name, text) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(quality_filter(black_box(text), "Isaia 41,10")));
        });
    }

    group.finish();
}

/// Benchmark the deterministic answer over the sample corpus.
fn bench_supervised(c: &mut Criterion) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpus.json");
    let corpus = Corpus::load(&path).expect("sample corpus failed to load");

    c.bench_function("supervised_answer", |b| {
        b.iter(|| black_box(build_supervised_answer(&corpus, black_box("Ho paura, cosa devo fare?"))));
    });
}

criterion_group!(benches, bench_classify, bench_quality_filter, bench_supervised);
criterion_main!(benches);
