//! Criterion benchmarks for tslog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tempfile::TempDir;
use tslog::core::record::format_record;
use tslog::core::{LogLevel, Logger, LoggerConfig};

fn bench_format_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_record");
    group.throughput(Throughput::Elements(1));

    group.bench_function("short_message", |b| {
        b.iter(|| format_record(LogLevel::Info, black_box("Short message")));
    });

    group.bench_function("long_message", |b| {
        let message = "x".repeat(512);
        b.iter(|| format_record(LogLevel::Info, black_box(message.as_str())));
    });

    group.finish();
}

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = Logger::new(
        LoggerConfig::new(temp_dir.path().join("bench.log")).with_stdout(false),
    );
    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Benchmark message")));
    });

    // Below the Info threshold: the record is rejected before any
    // allocation or lock, which is the hot path for disabled debug logs.
    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("Benchmark message")));
    });

    group.finish();
}

criterion_group!(benches, bench_format_record, bench_enqueue);
criterion_main!(benches);
