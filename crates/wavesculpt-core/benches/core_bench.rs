//! Criterion benchmarks for wavesculpt-core
//!
//! Run with: cargo bench -p wavesculpt-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wavesculpt_core::{EnvelopePair, SampleSequence, segment, subdivide};

const SAMPLE_RATE: u32 = 44000;
const LENGTHS: &[usize] = &[1_000, 10_000, 100_000];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin()
        })
        .collect()
}

fn bench_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Segmenter");

    for &len in LENGTHS {
        let input = generate_test_signal(len);

        group.bench_with_input(BenchmarkId::new("subdivide", len), &len, |b, _| {
            b.iter(|| black_box(subdivide(black_box(&input))));
        });

        group.bench_with_input(BenchmarkId::new("segment", len), &len, |b, _| {
            b.iter(|| black_box(segment(black_box(&input))));
        });
    }

    group.finish();
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("Envelope");

    for &len in LENGTHS {
        let audio = SampleSequence::new(generate_test_signal(len), SAMPLE_RATE).unwrap();
        let pair = EnvelopePair::new(vec![0.5f32; len / 2], vec![-0.5f32; len]);

        group.bench_with_input(BenchmarkId::new("fit_and_apply", len), &len, |b, _| {
            b.iter(|| black_box(pair.fit(audio.len()).apply(black_box(&audio))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segmenter, bench_envelope);
criterion_main!(benches);
