//! Benchmarks for copy-on-write updates.
//!
//! Run with: cargo bench --bench set

use cowpath::{get, remove, set, Key, Path, Value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// A map with `num_fields` integer fields.
fn flat_doc(num_fields: usize) -> Value {
    Value::map((0..num_fields).map(|i| (format!("field_{}", i), Value::from(i))))
}

/// `{level_0: {level_1: ... {value: 42}}}`
fn nested_doc(depth: usize) -> Value {
    (0..depth).rev().fold(Value::map([("value", Value::Int(42))]), |inner, i| {
        Value::map([(format!("level_{}", i), inner)])
    })
}

fn nested_path(depth: usize) -> Path {
    (0..depth)
        .map(|i| Key::field(format!("level_{}", i)))
        .chain(std::iter::once(Key::field("value")))
        .collect()
}

fn bench_set_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_flat_doc");

    for num_fields in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(1));
        let doc = flat_doc(num_fields);

        // The retained `doc` forces a clone of the root on every update.
        group.bench_with_input(BenchmarkId::new("shared", num_fields), &doc, |b, doc| {
            b.iter(|| black_box(set("field_0", 999, black_box(doc.clone()))));
        });

        // Handing the result back in lets every update reuse the same map.
        group.bench_with_input(BenchmarkId::new("owned", num_fields), &doc, |b, doc| {
            let mut current = doc.clone();
            b.iter(|| {
                current = set("field_0", 999, std::mem::take(&mut current));
            });
            black_box(current);
        });
    }

    group.finish();
}

fn bench_set_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_nested_doc");

    for depth in [5, 10, 20, 50] {
        let doc = nested_doc(depth);
        let path = nested_path(depth);

        group.bench_with_input(BenchmarkId::new("keys", depth), &depth, |b, _| {
            b.iter(|| black_box(set(&path, 999, black_box(doc.clone()))));
        });

        let path_string = path.to_string();
        group.bench_with_input(BenchmarkId::new("string", depth), &depth, |b, _| {
            b.iter(|| black_box(set(path_string.as_str(), 999, black_box(doc.clone()))));
        });
    }

    group.finish();
}

fn bench_read_and_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_and_remove");

    for depth in [5, 20] {
        let doc = nested_doc(depth);
        let path = nested_path(depth);

        group.bench_with_input(BenchmarkId::new("get", depth), &depth, |b, _| {
            b.iter(|| black_box(get(&path, black_box(&doc))));
        });
        group.bench_with_input(BenchmarkId::new("remove", depth), &depth, |b, _| {
            b.iter(|| black_box(remove(&path, black_box(doc.clone()))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_flat, bench_set_nested, bench_read_and_remove);

criterion_main!(benches);
