//! Benchmarks for the CPU-side particle simulation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;

use driftfield::canvas::DrawList;
use driftfield::field::{FieldConfig, ParticleField, TickContext};
use driftfield::visuals::Theme;

fn field_with(count: usize) -> ParticleField {
    let mut field = ParticleField::with_seed(FieldConfig::default(), Theme::Light, 42);
    field.initialize(count as f32 * 10.0, 800.0);
    field
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [30usize, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut field = field_with(count);
            let ctx = TickContext {
                pointer: Some(Vec2::new(400.0, 300.0)),
                width: count as f32 * 10.0,
                height: 800.0,
            };
            b.iter(|| {
                field.tick(black_box(&ctx));
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for count in [30usize, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let field = field_with(count);
            b.iter(|| {
                let mut list = DrawList::new();
                field.render(&mut list);
                black_box(list)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_render);
criterion_main!(benches);
