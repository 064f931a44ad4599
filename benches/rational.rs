use bigratio::codec::Encoding;
use bigratio::{BigInt, Rational};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn harmonic(n: u32) -> Rational {
    (1..=n).map(|k| Rational::new(1, k)).sum()
}

fn arithmetic_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let x = harmonic(50);
    let y = harmonic(60);

    group.bench_function("add", |b| b.iter(|| black_box(&x) + black_box(&y)));
    group.bench_function("mul", |b| b.iter(|| black_box(&x) * black_box(&y)));
    group.bench_function("cmp", |b| b.iter(|| black_box(&x) < black_box(&y)));
    group.finish();
}

fn approximate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("approximate");

    group.bench_function("pi", |b| {
        b.iter(|| Rational::approximate(black_box(std::f64::consts::PI), 64))
    });
    group.bench_function("tiny", |b| b.iter(|| Rational::approximate(black_box(1e-300), 64)));
    group.finish();
}

fn roots_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");
    let eps = Rational::new(1, BigInt::from(10).pow(30));
    let two = Rational::from_integer(2);
    let big = Rational::new(BigInt::from(7).pow(90) + 1u32, 3);

    group.bench_function("sqrt2", |b| b.iter(|| black_box(&two).nth_root(2, &eps)));
    group.bench_function("cbrt_big", |b| b.iter(|| black_box(&big).nth_root(3, &eps)));
    group.finish();
}

fn codec_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let x = harmonic(100);
    let bytes = x.to_bytes(Encoding::default()).unwrap();

    group.bench_function("encode", |b| b.iter(|| black_box(&x).to_bytes(Encoding::default())));
    group.bench_function("decode", |b| {
        b.iter(|| Rational::from_bytes(black_box(&bytes), Encoding::default()))
    });
    group.bench_function("parse", |b| {
        let text = x.to_string();
        b.iter(|| black_box(&text).parse::<Rational>())
    });
    group.finish();
}

criterion_group!(benches, arithmetic_bench, approximate_bench, roots_bench, codec_bench);
criterion_main!(benches);
