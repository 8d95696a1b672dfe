use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vecmath::{Double3, Float3, Float4, Swizzle};

fn create_float3() -> Float3 {
    Float3::new(1.0, -2.0, 3.5)
}

fn create_float4() -> Float4 {
    Float4::new(1.0, -2.0, 3.5, 0.25)
}

fn add_float3(c: &mut Criterion) {
    let a = create_float3();
    let b = create_float3();
    c.bench_function("add_float3", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b));
    });
}

fn add_float4(c: &mut Criterion) {
    let a = create_float4();
    let b = create_float4();
    c.bench_function("add_float4", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b));
    });
}

fn normalize_float3(c: &mut Criterion) {
    let a = create_float3();
    c.bench_function("normalize_float3", |bencher| {
        bencher.iter(|| black_box(a).normalized());
    });
}

fn cross_double3(c: &mut Criterion) {
    let a = Double3::new(1.0, 2.0, 3.0);
    let b = Double3::new(-3.0, 0.5, 2.0);
    c.bench_function("cross_double3", |bencher| {
        bencher.iter(|| black_box(a).cross(&black_box(b)));
    });
}

fn refract_float3(c: &mut Criterion) {
    let incident = Float3::new(1.0, -1.0, 0.0).normalized();
    let normal = Float3::unit_y();
    c.bench_function("refract_float3", |bencher| {
        bencher.iter(|| black_box(incident).refract(&black_box(normal), black_box(0.75)));
    });
}

fn named_swizzle_float4(c: &mut Criterion) {
    let a = create_float4();
    c.bench_function("named_swizzle_float4", |bencher| {
        bencher.iter(|| black_box(a).wzyx());
    });
}

fn parsed_swizzle_float4(c: &mut Criterion) {
    let a = create_float4();
    let swizzle = Swizzle::<4>::parse("wzyx").unwrap();
    c.bench_function("parsed_swizzle_float4", |bencher| {
        bencher.iter(|| black_box(swizzle).read(&black_box(a)));
    });
}

fn smooth_damp_float3(c: &mut Criterion) {
    let current = create_float3();
    let target = Float3::zeros();
    let velocity = Float3::same(0.5);
    c.bench_function("smooth_damp_float3", |bencher| {
        bencher.iter(|| {
            black_box(current).smooth_damp(&target, &black_box(velocity), 0.3, 1.0 / 60.0)
        });
    });
}

fn parse_float4(c: &mut Criterion) {
    let text = create_float4().to_string();
    c.bench_function("parse_float4", |bencher| {
        bencher.iter(|| Float4::parse(black_box(&text)));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
        add_float3,
        add_float4,
        normalize_float3,
        cross_double3,
        refract_float3,
        named_swizzle_float4,
        parsed_swizzle_float4,
        smooth_damp_float3,
        parse_float4,
);
criterion_main!(benches);
