use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mapcheck::{close_values, equal_values, Policy};
use serde_json::{json, Value};

fn nested_payload(records: usize) -> Value {
    let entries: Vec<Value> = (0..records)
        .map(|idx| {
            let base = idx as f64;
            json!({
                "label": format!("record-{idx}"),
                "samples": [base, base + 0.5, base + 1.0, base + 1.5],
                "moments": {"mean": base * 0.25, "variance": 1.5},
            })
        })
        .collect();
    json!({ "entries": entries })
}

fn close_benchmark(c: &mut Criterion) {
    let x = nested_payload(64);
    let y = nested_payload(64);
    let policy = Policy::default();

    c.bench_function("close/nested", |b| {
        b.iter(|| {
            close_values(black_box(&x), black_box(&y), "", black_box(&policy))
                .expect("payloads are close");
        });
    });

    c.bench_function("equal/nested", |b| {
        b.iter(|| {
            equal_values(black_box(&x), black_box(&y), "").expect("payloads are equal");
        });
    });
}

criterion_group!(benches, close_benchmark);
criterion_main!(benches);
