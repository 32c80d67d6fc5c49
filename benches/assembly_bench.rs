use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use weaver::{overlap_graph, Assembler, PrefixIndex};

/// Overlapping reads sampled from a synthetic genome, shuffled so the
/// assembler has to rediscover the layout.
fn sample_reads(genome_len: usize, read_len: usize, step: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bases = b"ACGT";
    let genome: Vec<u8> = (0..genome_len)
        .map(|_| bases[rng.gen_range(0..4)])
        .collect();

    let mut reads: Vec<Vec<u8>> = (0..genome_len.saturating_sub(read_len))
        .step_by(step)
        .map(|start| genome[start..start + read_len].to_vec())
        .collect();
    // Fisher-Yates shuffle
    for i in (1..reads.len()).rev() {
        reads.swap(i, rng.gen_range(0..=i));
    }
    reads
}

fn bench_prefix_index(c: &mut Criterion) {
    let reads = sample_reads(20_000, 100, 20, 11);
    c.bench_function("prefix_index/build_1k_reads", |b| {
        b.iter(|| PrefixIndex::build(black_box(&reads), 30).unwrap());
    });
}

fn bench_overlap_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_graph");
    for &num_reads in [100usize, 400].iter() {
        let reads = sample_reads(num_reads * 20, 100, 20, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_reads),
            &reads,
            |b, reads| {
                b.iter(|| overlap_graph(black_box(reads), 30).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for &genome_len in [2_000usize, 8_000].iter() {
        let reads = sample_reads(genome_len, 100, 50, 3);
        group.bench_with_input(
            BenchmarkId::from_parameter(genome_len),
            &reads,
            |b, reads| {
                let assembler = Assembler::new(30);
                b.iter(|| assembler.assemble(black_box(reads)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_prefix_index,
    bench_overlap_graph,
    bench_assemble
);
criterion_main!(benches);
