//! Benchmarks for trace generation.

use bitcalc::{trace_for, Calculator, Operation};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_trace_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_for");

    for operation in Operation::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(operation.name()),
            &operation,
            |bench, &operation| {
                bench.iter(|| black_box(trace_for(operation, black_box(0x0F0F_1234), black_box(8))));
            },
        );
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    for operation in [Operation::Add, Operation::Multiply, Operation::Divide] {
        let trace = trace_for(operation, -123_456, 789);
        group.bench_function(operation.name(), |bench| {
            bench.iter(|| black_box(trace.replay()));
        });
    }

    group.finish();
}

fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");

    let traced = Calculator::new();
    let bare = Calculator::without_trace();
    group.bench_function("run_traced", |bench| {
        bench.iter(|| black_box(traced.run(Operation::Multiply, black_box(1234), black_box(5678))));
    });
    group.bench_function("run_bare", |bench| {
        bench.iter(|| black_box(bare.run(Operation::Multiply, black_box(1234), black_box(5678))));
    });
    group.bench_function("run_raw", |bench| {
        bench.iter(|| black_box(bare.run_raw("divide", black_box("0xFFFF"), Some(black_box("17")))));
    });

    group.finish();
}

criterion_group!(benches, bench_trace_for, bench_replay, bench_calculator);
criterion_main!(benches);
