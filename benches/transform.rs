use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trs_math::{Degrees, TrsTransform, UnitQuaternion, Vector3};

pub fn bench_trs_transform_set_trs(c: &mut Criterion) {
    let translation = Vector3::new(20.0, 0.0, 0.0);
    let rotation = UnitQuaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_z());
    let scaling = Vector3::same(3.0);
    c.bench_function("trs_transform_set_trs", |bencher| {
        bencher.iter(|| {
            let mut transform = TrsTransform::new();
            transform.set_trs(
                black_box(&translation),
                black_box(rotation),
                black_box(&scaling),
            );
            transform
        });
    });
}

pub fn bench_trs_transform_set_rotation_euler(c: &mut Criterion) {
    let mut transform = TrsTransform::new();
    transform.set_translation(&Vector3::new(1.0, 2.0, 3.0));
    transform.set_scale(&Vector3::new(0.5, 2.0, 4.0));
    c.bench_function("trs_transform_set_rotation_euler", |bencher| {
        bencher.iter(|| {
            transform.set_rotation_euler(
                black_box(Degrees(10.0)),
                black_box(Degrees(20.0)),
                black_box(Degrees(30.0)),
            );
        });
    });
}

pub fn bench_trs_transform_point(c: &mut Criterion) {
    let mut transform = TrsTransform::new();
    transform.set_rotation_euler(Degrees(10.0), Degrees(20.0), Degrees(30.0));
    transform.set_translation(&Vector3::new(1.0, 2.0, 3.0));
    let point = Vector3::new(0.0, 10.0, 0.0);
    c.bench_function("trs_transform_point", |bencher| {
        bencher.iter(|| black_box(&transform).transform_point(black_box(&point)));
    });
}

criterion_group!(
    benches,
    bench_trs_transform_set_trs,
    bench_trs_transform_set_rotation_euler,
    bench_trs_transform_point
);
criterion_main!(benches);
