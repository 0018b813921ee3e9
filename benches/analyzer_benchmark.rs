use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmer_analyzer::counter::{count_following, count_kmers};
use kmer_analyzer::input::Input;
use kmer_analyzer::kmer::KmerLength;
use kmer_analyzer::report::{build_rows, write_tsv};
use kmer_analyzer::run::{analyze, analyze_input};
use kmer_analyzer::sequence::Sequence;
use std::io::{sink, Write};
use tempfile::NamedTempFile;

fn test_sequence() -> Sequence {
    Sequence::from("GATTACAACGTTNNACGTACGGCATTAGC".repeat(400).as_str())
}

fn bench_count_kmers(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_kmers");
    let sequence = test_sequence();

    for k in [3, 11, 21] {
        let k_len = KmerLength::new(k).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &k_len, |b, &k_len| {
            b.iter(|| count_kmers(black_box(&sequence), k_len))
        });
    }

    group.finish();
}

fn bench_count_following(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_following");
    let sequence = test_sequence();

    for k in [3, 11, 21] {
        let k_len = KmerLength::new(k).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &k_len, |b, &k_len| {
            b.iter(|| count_following(black_box(&sequence), k_len))
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let analysis = analyze(&test_sequence(), KmerLength::new(5).unwrap());

    group.bench_function("build_and_write_tsv", |b| {
        b.iter(|| {
            let rows = build_rows(&analysis.kmers, &analysis.follows, 1);
            write_tsv(black_box(&rows), sink()).unwrap();
        })
    });

    group.finish();
}

fn bench_analyze_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_input");

    let mut file = NamedTempFile::new().unwrap();
    for _ in 0..100 {
        writeln!(file, "{}", "acgtacgtacgtacgtacgtacgtacgtacgt".repeat(10)).unwrap();
    }
    let input = Input::File(file.path().to_path_buf());

    for k in [5, 11, 21] {
        let k_len = KmerLength::new(k).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &k_len, |b, &k_len| {
            b.iter(|| analyze_input(black_box(&input), k_len))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_count_kmers,
    bench_count_following,
    bench_report,
    bench_analyze_file,
);

criterion_main!(benches);
