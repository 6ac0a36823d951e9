use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use next_odd::demo::{run_demo, DEMO_INPUTS};
use next_odd::odd::{next_odd, next_odd_str};

fn benchmark_next_odd(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_odd");

    for input in [3.0_f64, 4.0, -1.9, 2.9, 1.0e15] {
        group.bench_with_input(BenchmarkId::new("float", input), &input, |b, &n| {
            b.iter(|| next_odd(black_box(n)))
        });
    }

    for input in ["5", "2.9", "NaN", "abc"] {
        group.bench_with_input(BenchmarkId::new("text", input), &input, |b, &s| {
            b.iter(|| next_odd_str(black_box(s)))
        });
    }

    group.finish();
}

fn benchmark_demo(c: &mut Criterion) {
    c.bench_function("run_demo", |b| b.iter(|| run_demo(black_box(&DEMO_INPUTS))));
}

criterion_group!(benches, benchmark_next_odd, benchmark_demo);
criterion_main!(benches);
