//! Criterion benchmarks for logharbour

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logharbour::prelude::*;
use logharbour::{decode_record, encode_record};
use serde_json::json;
use std::io;
use std::sync::Arc;

fn null_logger() -> Logger {
    Logger::new("bench", Arc::new(WriterSink::new(io::sink())))
}

// ============================================================================
// Derivation Benchmarks
// ============================================================================

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger().with_module("bench").with_who("alice");

    group.bench_function("with_who", |b| {
        b.iter(|| black_box(logger.with_who(black_box("bob"))));
    });

    group.bench_function("chained_context", |b| {
        b.iter(|| {
            black_box(
                logger
                    .with_op("transfer")
                    .with_what_class("account")
                    .with_what_instance_id("acc-1")
                    .warn(),
            )
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger().with_who("alice").with_remote_ip("10.1.2.3");

    group.bench_function("log", |b| {
        b.iter(|| logger.log(black_box("Simple message")));
    });

    group.bench_function("log_activity", |b| {
        b.iter(|| {
            logger.log_activity(
                black_box("payment"),
                json!({"amount": 42, "currency": "EUR"}),
            )
        });
    });

    group.bench_function("log_data_change", |b| {
        b.iter(|| {
            logger.log_data_change(
                black_box("limit raised"),
                ChangeInfo::new("account", "update").add_change("limit", 100, 500),
            )
        });
    });

    let debug_logger = logger.debug0();
    debug_logger.change_priority(Severity::Debug2);
    group.bench_function("log_debug", |b| {
        b.iter(|| debug_logger.log_debug(black_box("cache miss"), DebugInfo::new()));
    });

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger();
    logger.change_priority(Severity::Crit);
    let debug_logger = logger.debug2();

    group.bench_function("filtered_activity", |b| {
        b.iter(|| logger.log(black_box("dropped")));
    });

    group.bench_function("filtered_debug", |b| {
        b.iter(|| debug_logger.log_debug(black_box("dropped"), DebugInfo::new()));
    });

    group.finish();
}

// ============================================================================
// Serialization Benchmarks
// ============================================================================

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.throughput(Throughput::Elements(1));

    let mut entry = LogEntry::new(
        "bench",
        Severity::Info,
        "order placed",
        json!({"order": 1234, "items": ["a", "b", "c"]}),
    );
    entry.who = "alice".to_string();
    entry.remote_ip = "192.168.0.10".to_string();
    let record = encode_record(&entry).expect("Failed to encode");

    group.bench_function("encode_record", |b| {
        b.iter(|| encode_record(black_box(&entry)));
    });

    group.bench_function("decode_record", |b| {
        b.iter(|| decode_record(black_box(&record)));
    });

    let validator = RuleValidator::new();
    group.bench_function("validate", |b| {
        b.iter(|| validator.validate(black_box(&entry)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_derivation,
    bench_emission,
    bench_filtering,
    bench_serialization,
);

criterion_main!(benches);
