use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trs_math::{Degrees, Quaternion, UnitQuaternion, Vector3};

pub fn bench_quaternion_hamilton_product(c: &mut Criterion) {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(8.0, 7.0, 6.0, 5.0);
    c.bench_function("quaternion_hamilton_product", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn bench_quaternion_division(c: &mut Criterion) {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(8.0, 7.0, 6.0, 5.0);
    c.bench_function("quaternion_division", |bencher| {
        bencher.iter(|| black_box(&a) / black_box(&b));
    });
}

pub fn bench_unit_quaternion_from_euler_angles(c: &mut Criterion) {
    c.bench_function("unit_quaternion_from_euler_angles", |bencher| {
        bencher.iter(|| {
            UnitQuaternion::from_euler_angles(
                black_box(Degrees(10.0)),
                black_box(Degrees(20.0)),
                black_box(Degrees(30.0)),
            )
        });
    });
}

pub fn bench_unit_quaternion_rotate_vector(c: &mut Criterion) {
    let rotation = UnitQuaternion::from_axis_angle(Degrees(73.0), &Vector3::new(1.0, -2.0, 0.5));
    let vector = Vector3::new(5.0, 0.0, 0.0);
    c.bench_function("unit_quaternion_rotate_vector", |bencher| {
        bencher.iter(|| black_box(&rotation).rotate_vector(black_box(&vector)));
    });
}

criterion_group!(
    benches,
    bench_quaternion_hamilton_product,
    bench_quaternion_division,
    bench_unit_quaternion_from_euler_angles,
    bench_unit_quaternion_rotate_vector
);
criterion_main!(benches);
