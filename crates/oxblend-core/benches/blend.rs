//! Blend Path Benchmarks
//!
//! The engine exposes two indexing strategies precisely so callers can time
//! them on the deployment target and pick the winner; this bench does that,
//! with the real-valued formula as the baseline the tables are meant to beat.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxblend_core::{BlendEngine, formula};

/// Generate (a, b, t) triples covering the 8-bit domain unevenly
fn generate_triples(count: usize) -> Vec<(u8, u8, u8)> {
    (0..count)
        .map(|i| (((i * 37) % 256) as u8, ((i * 101) % 256) as u8, ((i * 53) % 256) as u8))
        .collect()
}

fn bench_channel_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_blend");
    let engine = BlendEngine::new().expect("table allocation");

    for size in [1000, 10000, 100000].iter() {
        let triples = generate_triples(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("multiplicative", size), size, |b, _| {
            b.iter(|| {
                let mut acc = 0u32;
                for &(a, bb, t) in &triples {
                    acc = acc.wrapping_add(
                        engine.blend_channel_8bit(black_box(a), black_box(bb), black_box(t)) as u32,
                    );
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("bytewise", size), size, |b, _| {
            b.iter(|| {
                let mut acc = 0u32;
                for &(a, bb, t) in &triples {
                    acc = acc.wrapping_add(engine.blend_channel_8bit_packed(
                        black_box(a),
                        black_box(bb),
                        black_box(t),
                    ) as u32);
                }
                acc
            })
        });

        // Formula baseline: square, lerp, sqrt, rescale per call
        group.bench_with_input(BenchmarkId::new("formula", size), size, |b, _| {
            b.iter(|| {
                let mut acc = 0u32;
                for &(a, bb, t) in &triples {
                    let mixed = formula::blend_channel(
                        black_box(a) as f64 / 255.0,
                        black_box(bb) as f64 / 255.0,
                        black_box(t) as f64 / 255.0,
                    );
                    acc = acc.wrapping_add((mixed * 255.0).round() as u32);
                }
                acc
            })
        });
    }

    group.finish();
}

fn bench_alpha_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_blend");
    let engine = BlendEngine::new().expect("table allocation");

    for size in [1000, 10000, 100000].iter() {
        let triples = generate_triples(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("multiplicative", size), size, |b, _| {
            b.iter(|| {
                let mut acc = 0u32;
                for &(a, bb, t) in &triples {
                    acc = acc.wrapping_add(
                        engine.blend_alpha_8bit(black_box(a), black_box(bb), black_box(t)) as u32,
                    );
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("bytewise", size), size, |b, _| {
            b.iter(|| {
                let mut acc = 0u32;
                for &(a, bb, t) in &triples {
                    acc = acc.wrapping_add(engine.blend_alpha_8bit_packed(
                        black_box(a),
                        black_box(bb),
                        black_box(t),
                    ) as u32);
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("formula", size), size, |b, _| {
            b.iter(|| {
                let mut acc = 0u32;
                for &(a, bb, t) in &triples {
                    let mixed = formula::blend_alpha(
                        black_box(a) as f64,
                        black_box(bb) as f64,
                        black_box(t) as f64 / 255.0,
                    );
                    acc = acc.wrapping_add(mixed.round() as u32);
                }
                acc
            })
        });
    }

    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("table_build", |b| {
        b.iter(|| BlendEngine::new().expect("table allocation"))
    });
}

criterion_group!(benches, bench_channel_blend, bench_alpha_blend, bench_table_build);
criterion_main!(benches);
