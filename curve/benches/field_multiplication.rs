use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{BaseField, ScalarField};

fn bench_base_field_mul(c: &mut Criterion) {
    c.bench_function("base_field_mul", |bencher| {
        let a = BaseField::from_u64(123456789) * BaseField::from_u64(0xdead_beef_cafe_f00d);
        let b = BaseField::from_u64(987654321).inverse();
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

fn bench_base_field_inverse(c: &mut Criterion) {
    c.bench_function("base_field_inverse", |bencher| {
        let a = BaseField::from_u64(987654321);
        bencher.iter(|| black_box(black_box(&a).inverse()))
    });
}

fn bench_scalar_field_mul(c: &mut Criterion) {
    c.bench_function("scalar_field_mul", |bencher| {
        let a = ScalarField::from_u64(123456789).inverse();
        let b = ScalarField::from_u64(987654321).inverse();
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

criterion_group!(
    benches,
    bench_base_field_mul,
    bench_base_field_inverse,
    bench_scalar_field_mul
);
criterion_main!(benches);
