//! Criterion benchmarks for the synonym mapping builder.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use elasticpress_synonyms::mapping::{BuilderConfig, FilterLayout, SynonymEntry, SynonymMappingBuilder};
use elasticpress_synonyms::util::slugify;
use serde_json::{Value, json};
use std::hint::black_box;

/// Generate a wordlist for benchmarking.
fn generate_wordlist(count: usize) -> Vec<SynonymEntry> {
    let words = [
        "car", "Ice Cream", "Crème Brûlée", "television", "bicycle", "Route 66", "sofa",
        "kitchen", "municipality", "library",
    ];

    (0..count)
        .map(|i| {
            let word = words[i % words.len()];
            SynonymEntry::new(
                format!("{word} {i}"),
                format!("alias {i}, alternate {i},other {i} , more"),
            )
        })
        .collect()
}

fn base_mapping() -> Value {
    json!({
        "settings": {
            "analysis": {
                "filter": {
                    "ewp_snowball": { "type": "snowball", "language": "english" }
                },
                "analyzer": {
                    "default": {
                        "tokenizer": "standard",
                        "filter": ["lowercase", "stop", "ewp_snowball"]
                    }
                }
            }
        }
    })
}

fn bench_slug(c: &mut Criterion) {
    let entries = generate_wordlist(1000);
    let mut group = c.benchmark_group("slug");

    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("slugify_wordlist", |b| {
        b.iter(|| {
            for entry in &entries {
                black_box(slugify(black_box(&entry.word)));
            }
        })
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let entries = generate_wordlist(1000);
    let mut group = c.benchmark_group("build_mapping");
    group.throughput(Throughput::Elements(entries.len() as u64));

    let per_entry = SynonymMappingBuilder::default();
    group.bench_function("per_entry_1000", |b| {
        b.iter_with_setup(base_mapping, |mapping| {
            black_box(per_entry.build(mapping, black_box(&entries)))
        })
    });

    let deduped = SynonymMappingBuilder::new(BuilderConfig::new().with_dedupe_analyzer_filters(true));
    group.bench_function("per_entry_dedupe_1000", |b| {
        b.iter_with_setup(base_mapping, |mapping| {
            black_box(deduped.build(mapping, black_box(&entries)))
        })
    });

    let shared = SynonymMappingBuilder::new(BuilderConfig::new().with_layout(FilterLayout::Shared));
    group.bench_function("shared_1000", |b| {
        b.iter_with_setup(base_mapping, |mapping| {
            black_box(shared.build(mapping, black_box(&entries)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_slug, bench_build);
criterion_main!(benches);
