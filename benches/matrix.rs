use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trs_math::{Matrix3, Matrix4};

fn example_matrix3() -> Matrix3 {
    Matrix3::new(1.0, 5.0, -1.0, 11.0, 3.0, 4.0, 1.0, -1.0, 3.0)
}

pub fn bench_matrix3_inverse(c: &mut Criterion) {
    let m = example_matrix3();
    c.bench_function("matrix3_inverse", |bencher| {
        bencher.iter(|| black_box(&m).inverted());
    });
}

pub fn bench_matrix3_checked_inverse(c: &mut Criterion) {
    let m = example_matrix3();
    c.bench_function("matrix3_checked_inverse", |bencher| {
        bencher.iter(|| black_box(&m).try_inverted());
    });
}

pub fn bench_matrix3_mul(c: &mut Criterion) {
    let a = example_matrix3();
    let b = a.transposed();
    c.bench_function("matrix3_mul", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn bench_matrix4_mul(c: &mut Criterion) {
    let a = Matrix4::from_upper_left_3x3(&example_matrix3());
    let b = a.transposed();
    c.bench_function("matrix4_mul", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

criterion_group!(
    benches,
    bench_matrix3_inverse,
    bench_matrix3_checked_inverse,
    bench_matrix3_mul,
    bench_matrix4_mul
);
criterion_main!(benches);
