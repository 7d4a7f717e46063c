use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Affine, Group, Projective, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_affine_double(c: &mut Criterion) {
    let g = Affine::generator();
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_projective_double(c: &mut Criterion) {
    let g = Projective::generator();
    c.bench_function("projective_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator();
    let h = g.mul_u64(3);
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g) + black_box(&h)))
    });
}

fn bench_projective_add(c: &mut Criterion) {
    let g = Projective::generator();
    let h = g.mul_u64(3);
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g) + black_box(&h)))
    });
}

fn bench_projective_scalar_mul(c: &mut Criterion) {
    let g = Projective::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("projective_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_mul_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(Projective::mul_generator(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);
    let p = Projective::mul_generator(&random_scalar(&mut rng));

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| {
            black_box(Projective::double_scalar_mul_basepoint(
                black_box(&a),
                black_box(&b),
                black_box(&p),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_projective_double,
    bench_affine_add,
    bench_projective_add,
    bench_projective_scalar_mul,
    bench_mul_generator,
    bench_double_scalar_mul
);
criterion_main!(benches);
