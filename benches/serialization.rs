use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_luat::{to_string, to_string_minified, to_value, Table, Value};

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Value {
    let products: Vec<Product> = (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product \"{}\"\n", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect();
    to_value(&products).unwrap_or_default()
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let value = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&value)))
        });
    }
    group.finish();
}

fn benchmark_serialize_minified(c: &mut Criterion) {
    let value = products(100);
    c.bench_function("serialize_minified_100", |b| {
        b.iter(|| to_string_minified(black_box(&value)))
    });
}

fn benchmark_escape_heavy_strings(c: &mut Criterion) {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    let value = Value::from(bytes);
    c.bench_function("serialize_binary_64k", |b| {
        b.iter(|| to_string(black_box(&value)))
    });
}

fn benchmark_deep_nesting(c: &mut Criterion) {
    let mut value = Value::Table(Table::new());
    for _ in 1..150 {
        value = Value::Table(Table::from_sequence(vec![value]));
    }
    c.bench_function("serialize_nested_150", |b| {
        b.iter(|| to_string(black_box(&value)))
    });
}

criterion_group!(
    benches,
    benchmark_serialize_array,
    benchmark_serialize_minified,
    benchmark_escape_heavy_strings,
    benchmark_deep_nesting
);
criterion_main!(benches);
