//! Criterion benchmarks for the gutensearch core:
//! - Text analysis (tokenization + normalization)
//! - Document ingestion
//! - Boolean query evaluation
//! - Zipf analysis

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use gutensearch::analysis::analyzer::{Analyzer, StandardAnalyzer};
use gutensearch::engine::SearchEngine;

/// Generate synthetic documents from a small vocabulary.
fn generate_documents(count: usize) -> Vec<String> {
    let words = [
        "whale", "ship", "captain", "harpoon", "ocean", "island", "storm", "sail", "crew",
        "voyage", "chapter", "story", "book", "reading", "writing", "history", "letter", "king",
        "queen", "castle", "forest", "river", "mountain", "journey", "stranger", "evening",
        "morning", "window", "garden", "shadow", "silence", "memory",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j * 13) % words.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = StandardAnalyzer::new().unwrap();
    let text = generate_documents(1).remove(0);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("standard_analyzer", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&text)).unwrap().collect();
            black_box(tokens)
        })
    });
    group.finish();
}

fn bench_ingestion(c: &mut Criterion) {
    let documents = generate_documents(100);

    let mut group = c.benchmark_group("ingestion");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("ingest_100_documents", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new();
            for (id, doc) in documents.iter().enumerate() {
                engine.ingest_document(black_box(doc), id as u32).unwrap();
            }
            black_box(engine.stats())
        })
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut engine = SearchEngine::new();
    for (id, doc) in generate_documents(1000).iter().enumerate() {
        engine.ingest_document(doc, id as u32).unwrap();
    }

    let mut group = c.benchmark_group("search");
    group.bench_function("conjunctive_query", |b| {
        b.iter(|| black_box(engine.search(black_box("whale ship captain")).unwrap()))
    });
    group.bench_function("query_with_not", |b| {
        b.iter(|| black_box(engine.search(black_box("whale ship NOT storm")).unwrap()))
    });
    group.finish();
}

fn bench_zipf(c: &mut Criterion) {
    let mut engine = SearchEngine::new();
    for (id, doc) in generate_documents(500).iter().enumerate() {
        engine
            .ingest_document_with_frequency(doc, id as u32)
            .unwrap();
    }

    c.bench_function("analyze_zipf", |b| {
        b.iter(|| black_box(engine.analyze_zipf()))
    });
}

criterion_group!(benches, bench_analysis, bench_ingestion, bench_search, bench_zipf);
criterion_main!(benches);
