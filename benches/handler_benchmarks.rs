//! Criterion benchmarks for cli_console_handler

use cli_console_handler::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;

/// Console that swallows all output so benches measure routing only.
struct DiscardConsole;

impl ConsoleOutput for DiscardConsole {
    fn is_active(&self) -> bool {
        true
    }

    fn debug(&self, message: &str) {
        black_box(message);
    }

    fn log(&self, message: &str) {
        black_box(message);
    }

    fn warning(&self, message: &str) {
        black_box(message);
    }

    fn error(&self, message: &str, should_terminate: bool) {
        black_box((message, should_terminate));
    }
}

// ============================================================================
// Severity Map Benchmarks
// ============================================================================

fn bench_severity_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("severity_map");
    group.throughput(Throughput::Elements(1));

    group.bench_function("build", |b| {
        b.iter(|| {
            let map = SeverityMap::build().unwrap();
            black_box(map)
        });
    });

    let map = SeverityMap::build().unwrap();

    group.bench_function("lookup_first", |b| {
        b.iter(|| {
            let entry = map.lookup(black_box(Severity::Debug));
            black_box(entry)
        });
    });

    group.bench_function("lookup_last", |b| {
        b.iter(|| {
            let entry = map.lookup(black_box(Severity::Emergency));
            black_box(entry)
        });
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    let plain = LogRecord::new(Severity::Info, "Request processed");
    let contextual = LogRecord::new(Severity::Info, "Request processed")
        .with_context(json!({"user_id": 42, "path": "/api/v1/items"}))
        .with_extra(json!({"elapsed_ms": 17}));

    group.bench_function("standard", |b| {
        b.iter(|| {
            let rendered = MessageTemplate::Standard.render(black_box(&plain));
            black_box(rendered)
        });
    });

    group.bench_function("verbose", |b| {
        b.iter(|| {
            let rendered = MessageTemplate::Verbose.render(black_box(&contextual));
            black_box(rendered)
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let mut handler = ConsoleHandler::new(DiscardConsole, Severity::Debug, true, false).unwrap();

    let info = LogRecord::new(Severity::Info, "Info message");
    let error = LogRecord::new(Severity::Error, "Error message");

    group.bench_function("info", |b| {
        b.iter(|| {
            let outcome = handler.handle(black_box(&info)).unwrap();
            black_box(outcome)
        });
    });

    group.bench_function("error_prefixed", |b| {
        b.iter(|| {
            let outcome = handler.handle(black_box(&error)).unwrap();
            black_box(outcome)
        });
    });

    let mut gated = ConsoleHandler::new(DiscardConsole, Severity::Error, true, false).unwrap();
    let below = LogRecord::new(Severity::Info, "Filtered message");

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            let outcome = gated.handle(black_box(&below)).unwrap();
            black_box(outcome)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_severity_map, bench_rendering, bench_dispatch);
criterion_main!(benches);
