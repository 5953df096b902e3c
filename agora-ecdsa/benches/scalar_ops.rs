use agora_ecdsa::arithmetic::{inverse, reduce};
use agora_ecdsa::rng::random_scalar;
use agora_ecdsa::Curve;
use criterion::{criterion_group, criterion_main, Criterion};

use rand::rngs::OsRng;
use rand::Rng;

fn bench_scalar_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_ops");

    let mut rng = OsRng;
    let curve = Curve::secp256k1();
    let n = 50_usize;
    let random_scalars: Vec<_> = (0..n)
        .map(|_| random_scalar(&mut rng, &curve.order))
        .collect();

    group.bench_function("inverse", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| inverse(&random_scalars[i], &curve.order))
    });

    group.bench_function("reduce_negative", |b| {
        let i = rng.gen_range(0..n);
        let negative = -&random_scalars[i] * &random_scalars[(i + 1) % n];
        b.iter(|| reduce(&negative, &curve.prime_modulus))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_ops);
criterion_main!(benches);
