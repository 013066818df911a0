//! Benchmarks for transformation and pagination performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docfmt::{paginate, render, PageConstraints};

/// Build a synthetic document with the given number of sections.
fn create_test_document(sections: usize) -> String {
    let mut source = String::new();
    for i in 0..sections {
        source.push_str(&format!("# Section {}\n\n", i + 1));
        source.push_str(
            "This paragraph mixes **bold**, *italic*, and __underlined__ runs \
             with plain text long enough to wrap at narrow page widths.\n\n",
        );
        source.push_str("• first point\n• second point\n\n");
        source.push_str(&format!("{}. numbered item\n\n⸻\n\n", i + 1));
    }
    source
}

fn bench_transform(c: &mut Criterion) {
    let small = create_test_document(5);
    let large = create_test_document(200);

    c.bench_function("transform_small", |b| {
        b.iter(|| render(black_box(&small)))
    });
    c.bench_function("transform_large", |b| {
        b.iter(|| render(black_box(&large)))
    });
}

fn bench_paginate(c: &mut Criterion) {
    let small = create_test_document(5);
    let large = create_test_document(200);
    let constraints = PageConstraints::new(60, 40);

    c.bench_function("paginate_small", |b| {
        b.iter(|| paginate(black_box(&small), &constraints).unwrap())
    });
    c.bench_function("paginate_large", |b| {
        b.iter(|| paginate(black_box(&large), &constraints).unwrap())
    });
}

criterion_group!(benches, bench_transform, bench_paginate);
criterion_main!(benches);
