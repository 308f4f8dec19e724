// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cosmos_catalog::{Catalog, Category, Market, Markets, ProjectRecord, Region, Regions};
use cosmos_filter::{FilterCache, FilterState, PrimaryFilter, compute_counts, compute_visible};

fn synthetic_catalog(len: usize) -> Catalog {
    let projects = (0..len)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            let markets = match i % 3 {
                0 => Markets::B2B,
                1 => Markets::B2C,
                _ => Markets::all(),
            };
            let regions = if i % 5 == 0 { Regions::KOREA } else { Regions::US };
            ProjectRecord::new(format!("p{i}"), format!("Project {i}"), category)
                .with_featured(i % 7 == 0)
                .with_markets(markets)
                .with_regions(regions)
        })
        .collect();
    Catalog::new(projects, Vec::new()).expect("synthetic ids are unique")
}

fn selective_state() -> FilterState {
    let mut state = FilterState::new();
    state.set_primary(PrimaryFilter::Category(Category::DevTools));
    state.toggle_market(Market::B2c);
    state.toggle_region(Region::Korea);
    state
}

fn bench_compute_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/compute_visible");

    // The showcase is tens of records; larger sizes check the scan stays linear.
    for len in [16usize, 256, 4_096] {
        let catalog = synthetic_catalog(len);
        let state = selective_state();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("direct", len), &catalog, |b, catalog| {
            b.iter(|| black_box(compute_visible(catalog, &state)));
        });

        group.bench_with_input(BenchmarkId::new("cached", len), &catalog, |b, catalog| {
            let mut cache = FilterCache::new(catalog);
            b.iter(|| black_box(cache.visible(&state)));
        });
    }

    group.finish();
}

fn bench_compute_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/compute_counts");
    for len in [16usize, 256, 4_096] {
        let catalog = synthetic_catalog(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &catalog, |b, catalog| {
            b.iter(|| black_box(compute_counts(catalog)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_visible, bench_compute_counts);
criterion_main!(benches);
