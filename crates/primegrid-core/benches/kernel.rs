use criterion::{black_box, criterion_group, criterion_main, Criterion};

use primegrid_core::is_prime;

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    group.bench_function("small_composite", |b| {
        b.iter(|| is_prime(black_box(9_999)))
    });

    group.bench_function("small_prime", |b| {
        b.iter(|| is_prime(black_box(9_973)))
    });

    // Largest prime below 10^12: ~170k loop steps per call.
    group.bench_function("large_prime", |b| {
        b.iter(|| is_prime(black_box(999_999_999_989)))
    });

    group.finish();
}

criterion_group!(benches, bench_kernel);
criterion_main!(benches);
