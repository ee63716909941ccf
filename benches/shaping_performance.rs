// benches/shaping_performance.rs
//! Benchmarks for the hot paths: catalog lookup, classification and shaping.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use envelope_errors::{
    Cause, Classifier, ErrorCode, FieldViolation, FixedClock, Shaper, ValidationErrors, definitions,
};
use std::hint::black_box;

fn fixed_shaper() -> Shaper<FixedClock> {
    let clock = FixedClock::parse("2025-01-01T00:00:00Z").expect("valid timestamp");
    Shaper::with_classifier(Classifier::new().with_clock(clock))
}

fn violations(count: usize) -> ValidationErrors {
    (0..count)
        .map(|i| match i % 3 {
            0 => FieldViolation::new(format!("Field{i}"), "required"),
            1 => FieldViolation::new(format!("Field{i}"), "gt").with_param("10"),
            _ => FieldViolation::new(format!("Field{i}"), "min")
                .with_param("3")
                .with_value("ab"),
        })
        .collect()
}

// ============================================================================
// Catalog
// ============================================================================

fn bench_catalog_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_lookup");

    group.bench_function("known", |b| {
        b.iter(|| black_box(ErrorCode::new(black_box(-40105))).status())
    });
    group.bench_function("unknown", |b| {
        b.iter(|| black_box(ErrorCode::new(black_box(-77777))).message())
    });

    group.finish();
}

// ============================================================================
// Classification
// ============================================================================

fn bench_classify_violations(c: &mut Criterion) {
    let classifier = Classifier::new().with_clock(FixedClock::parse("2025-01-01T00:00:00Z").expect("valid timestamp"));
    let mut group = c.benchmark_group("classify_violations");

    for count in [1usize, 4, 16, 64] {
        let causes = [Cause::from(violations(count))];
        group.bench_with_input(BenchmarkId::from_parameter(count), &causes, |b, causes| {
            b.iter(|| classifier.classify(black_box(causes)))
        });
    }

    group.finish();
}

// ============================================================================
// Shaping
// ============================================================================

fn bench_shape(c: &mut Criterion) {
    let shaper = fixed_shaper();
    let opaque = Cause::from("bad password");
    let validation = Cause::from(violations(4));

    let mut group = c.benchmark_group("shape");
    group.bench_function("no_cause", |b| {
        b.iter(|| shaper.shape(black_box(definitions::DATABASE_ERROR), None))
    });
    group.bench_function("opaque", |b| {
        b.iter(|| shaper.shape(black_box(definitions::INVALID_PASSWORD), Some(&opaque)))
    });
    group.bench_function("validation_4", |b| {
        b.iter(|| shaper.shape(black_box(definitions::INVALID_INPUT_PARAMETER), Some(&validation)))
    });
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let (_, body) = fixed_shaper().shape(definitions::INVALID_INPUT_PARAMETER, Some(&Cause::from(violations(4))));

    c.bench_function("serialize_error_body", |b| {
        b.iter(|| serde_json::to_vec(black_box(&body)))
    });
}

criterion_group!(
    benches,
    bench_catalog_lookup,
    bench_classify_violations,
    bench_shape,
    bench_serialize
);
criterion_main!(benches);
