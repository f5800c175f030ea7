//! Performance benchmarks for store-actions.
//!
//! Run with: cargo bench --package store-actions

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use store_actions::{augment, StateBinding, StateCell, Store, StoreDefinition, TypeTag};
use std::sync::Arc;

// ============================================================================
// Helper functions to generate test data
// ============================================================================

/// A definition with N fields cycling through every tag plus untagged data.
fn generate_definition(num_fields: usize) -> StoreDefinition {
    let mut definition = StoreDefinition::new("Bench");
    for i in 0..num_fields {
        let name = format!("field{}", i);
        definition = match i % 6 {
            0 => definition.number(name, 0),
            1 => definition.boolean(name, false),
            2 => definition.array(name, json!([])),
            3 => definition.tagged(name, "", TypeTag::String),
            4 => definition.any(name, json!(null)),
            _ => definition.field(name, i),
        };
    }
    definition
}

/// A binding over a bare cell, without listener bookkeeping.
fn cell_binding(definition: &StoreDefinition) -> StateBinding {
    let cell = Arc::new(StateCell::new(json!(definition.instantiate())));
    let (read, write) = (cell.clone(), cell);
    StateBinding::new(move || read.snapshot(), move |partial| write.merge(partial))
}

// ============================================================================
// Benchmark: synthesis with varying field counts
// ============================================================================

fn bench_augment(c: &mut Criterion) {
    let mut group = c.benchmark_group("augment");

    for num_fields in [6, 60, 600] {
        group.throughput(Throughput::Elements(num_fields as u64));
        let definition = generate_definition(num_fields);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_fields),
            &num_fields,
            |b, _| {
                b.iter(|| {
                    let store = augment(black_box(&definition), cell_binding(&definition));
                    black_box(store)
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: individual actions
// ============================================================================

fn bench_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("actions");
    let store = Store::from_definition(
        StoreDefinition::new("Bench")
            .number("count", 0)
            .boolean("flag", false)
            .array("items", json!([1, 2, 3])),
    );

    let count = store.field("count").unwrap();
    group.bench_function("increment", |b| {
        b.iter(|| count.increment().unwrap());
    });

    let flag = store.field("flag").unwrap();
    group.bench_function("toggle", |b| {
        b.iter(|| flag.toggle().unwrap());
    });

    let items = store.field("items").unwrap();
    let probe = json!(3);
    group.bench_function("has_item", |b| {
        b.iter(|| black_box(items.has_item(black_box(&probe)).unwrap()));
    });

    group.bench_function("add_then_remove", |b| {
        b.iter(|| {
            items.add(json!({"id": 7})).unwrap();
            items.remove(json!({"id": 7})).unwrap();
        });
    });

    group.bench_function("invoke_by_name", |b| {
        b.iter(|| {
            store
                .actions()
                .invoke(black_box("incrementCount"), None)
                .unwrap()
        });
    });

    group.finish();
}

// ============================================================================
// Benchmark: action cost as unrelated state grows
// ============================================================================

fn bench_increment_wide_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment_wide_state");

    for num_fields in [10, 100, 1000] {
        let store = Store::from_definition(generate_definition(num_fields));
        let field = store.field("field0").unwrap().clone();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_fields),
            &num_fields,
            |b, _| {
                b.iter(|| field.increment().unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_augment,
    bench_actions,
    bench_increment_wide_state
);
criterion_main!(benches);
