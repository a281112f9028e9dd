//! Benchmarks for description rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathpat::{find_pattern_in_strings, CaseSensitivity};

fn resolved_pattern(count: usize) -> pathpat::Pattern {
    let values: Vec<String> = (0..count)
        .map(|i| format!("host-{}_zone{}", i * 17 % 389, i % 11))
        .collect();
    find_pattern_in_strings(&values, CaseSensitivity::Sensitive).unwrap()
}

fn bench_describe_short(c: &mut Criterion) {
    let pattern = resolved_pattern(1000);
    c.bench_function("describe_short_1000", |b| {
        b.iter(|| black_box(&pattern).describe_short());
    });
}

fn bench_describe_detailed(c: &mut Criterion) {
    let pattern = resolved_pattern(1000);
    for width in [40, 80, 200] {
        c.bench_function(&format!("describe_detailed_1000_w{width}"), |b| {
            b.iter(|| black_box(&pattern).describe_detailed(width));
        });
    }
}

criterion_group!(benches, bench_describe_short, bench_describe_detailed);
criterion_main!(benches);
