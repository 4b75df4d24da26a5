//! Criterion benchmarks for the Verba spell checker.
//!
//! Compares the two membership strategies and measures correction
//! generation over a synthetic word list.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use verba::spelling::{Dictionary, SearchAlgorithm, SpellChecker};

/// Generate `count` distinct lowercase words.
fn generate_words(count: usize) -> Vec<String> {
    let letters: Vec<char> = ('a'..='z').collect();
    (0..count)
        .map(|mut i| {
            let mut word = String::new();
            loop {
                word.push(letters[i % 26]);
                i /= 26;
                if i == 0 {
                    break;
                }
            }
            word.push_str("ing");
            word
        })
        .collect()
}

/// Benchmark linear against binary lookup.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000, 10_000, 50_000] {
        let words = generate_words(size);
        let probes: Vec<&String> = words.iter().step_by(size / 100).collect();
        let mut checker = SpellChecker::with_dictionary(Dictionary::from_words(&words));

        group.throughput(Throughput::Elements(probes.len() as u64));
        for algorithm in [SearchAlgorithm::Linear, SearchAlgorithm::Binary] {
            checker.set_search_algorithm(algorithm);
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &probes,
                |b, probes| {
                    b.iter(|| {
                        for word in probes.iter() {
                            black_box(checker.word_is_correct(black_box(word)));
                        }
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark single-edit correction.
fn bench_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction");
    group.sample_size(20); // Reduce sample size for faster execution

    let checker = SpellChecker::with_dictionary(Dictionary::from_words(generate_words(10_000)));
    let misspellings = vec!["aibng", "qzin", "bbbinng", "cding", "zzzzz"];

    group.bench_function("correct_single_word", |b| {
        b.iter(|| black_box(checker.correct_using_all_methods(black_box("aibng"))))
    });

    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("correct_batch_words", |b| {
        b.iter(|| {
            for word in &misspellings {
                black_box(checker.correct_using_all_methods(black_box(word)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_correction);

criterion_main!(benches);
