use criterion::{criterion_group, criterion_main, Criterion};

use mandelgrid_core::{RenderRequest, Viewport};
use mandelgrid_render::{render, Palette};

fn bench_full_frame_render(c: &mut Criterion) {
    let request = RenderRequest::new(640, 480, 256, Viewport::default()).unwrap();

    c.bench_function("full_frame_640x480", |b| {
        b.iter(|| render(&request).unwrap());
    });
}

fn bench_iteration_throughput(c: &mut Criterion) {
    let viewport = Viewport::new(-0.80, 0.05, -0.70, 0.15).unwrap();
    let request = RenderRequest::new(256, 256, 1000, viewport).unwrap();

    c.bench_function("render_256x256_1000iter", |b| {
        b.iter(|| render(&request).unwrap());
    });
}

fn bench_colorize(c: &mut Criterion) {
    let request = RenderRequest::new(640, 480, 500, Viewport::default()).unwrap();
    let result = render(&request).unwrap();
    let palette = Palette::build(500);

    c.bench_function("colorize_640x480", |b| {
        b.iter(|| palette.colorize(&result.grid));
    });
}

fn bench_palette_build(c: &mut Criterion) {
    c.bench_function("palette_build_10000", |b| {
        b.iter(|| Palette::build(10_000));
    });
}

criterion_group!(
    benches,
    bench_full_frame_render,
    bench_iteration_throughput,
    bench_colorize,
    bench_palette_build
);
criterion_main!(benches);
