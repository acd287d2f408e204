use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logsamples::{generate_samples, write_samples, SampleKind};

const RENDER_REPEAT: usize = 100;

fn render_benchmark(c: &mut Criterion) {
    c.bench_function("render all-samples", |b| {
        let mut out = Vec::new();
        b.iter(|| {
            out.clear();
            write_samples(&mut out, &generate_samples(), &SampleKind::ALL, false).unwrap();
            black_box(out.len())
        });
    });

    c.bench_function(
        &format!("render all-samples-with-hints x{RENDER_REPEAT}"),
        |b| {
            let mut out = Vec::new();
            let samples = generate_samples();
            b.iter(|| {
                out.clear();
                for _ in 0..RENDER_REPEAT {
                    write_samples(&mut out, &samples, &SampleKind::ALL, true).unwrap();
                }
                black_box(out.len())
            });
        },
    );
}

fn line_count_benchmark(c: &mut Criterion) {
    c.bench_function("line-count all-samples", |b| {
        let samples = generate_samples();
        b.iter(|| {
            SampleKind::ALL
                .iter()
                .map(|k| black_box(samples.get(*k)).line_count())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, render_benchmark, line_count_benchmark);
criterion_main!(benches);
