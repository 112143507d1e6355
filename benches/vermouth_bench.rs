use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vermouth::VersionRecord;
use vermouth::format;
use vermouth::timestamp;

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_description", |b| {
        b.iter(|| VersionRecord::parse(black_box("v1.2.3-beta1-5-gabcdef1"), black_box("0.0.1")))
    });

    c.bench_function("parse_fallback", |b| {
        b.iter(|| VersionRecord::parse(black_box("release-1.0"), black_box("custom")))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let record = VersionRecord::parse("v1.2.3-5-gabcdef1", "0.0.1").with_metadata("build");

    c.bench_function("render_full_version", |b| {
        b.iter(|| format::render(black_box(&record), black_box(format::DEFAULT_FORMAT)))
    });
}

fn benchmark_timestamp(c: &mut Criterion) {
    let now = chrono::Local::now();

    c.bench_function("stamp_default_pattern", |b| {
        b.iter(|| timestamp::stamp(black_box(timestamp::DEFAULT_TIMESTAMP), &now).expect("Failed to stamp"))
    });
}

criterion_group!(benches, benchmark_parse, benchmark_render, benchmark_timestamp);
criterion_main!(benches);
