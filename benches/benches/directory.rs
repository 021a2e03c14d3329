// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boothmap_catalog::{
    BoothCatalog, BoothId, BoothRecord, BoothSize, CatalogBuilder, ExhibitorRecord, Zone, builtin,
};
use boothmap_directory::{DirectoryFilter, DirectoryIndex, DirectoryQuery};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const NAMES: [&str; 6] = ["Acme", "Globex", "Initech", "Umbrella", "Hooli", "Vandelay"];
const REPS: [&str; 5] = ["Ada", "Grace", "Linus", "Barbara", "Dennis"];

/// `n` booths, every third one assigned, one vendor tent every tenth booth.
fn synthetic_catalog(n: u32) -> BoothCatalog {
    let mut builder = CatalogBuilder::new();
    for raw in 1..=n {
        let Some(id) = BoothId::new(raw) else {
            continue;
        };
        let zone = if raw % 10 == 0 {
            Zone::OutsideBottom
        } else {
            Zone::MainTent
        };
        let size = BoothSize::ALL[(raw as usize) % BoothSize::ALL.len()];
        builder.push_booth(BoothRecord::new(id, size, zone, (raw % 8) as u8));
        if raw % 3 == 0 {
            let name = NAMES[(raw as usize) % NAMES.len()];
            let exhibitor = ExhibitorRecord::new(
                format!("{name} {raw}"),
                "Synthetic exhibitor.",
                format!("https://example.com/{raw}"),
            )
            .with_representative(REPS[(raw as usize) % REPS.len()])
            .with_representative(REPS[(raw as usize + 1) % REPS.len()]);
            builder.assign(id, exhibitor);
        }
    }
    builder.build().expect("synthetic catalog is consistent")
}

fn bench_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("boothmap_directory");
    group.sample_size(50);

    let venue = builtin::catalog().expect("built-in catalog is consistent");
    let index = DirectoryIndex::new(&venue);
    let queries = [
        ("blank", DirectoryQuery::default()),
        ("name", DirectoryQuery::new("green", DirectoryFilter::All)),
        ("rep_assigned", DirectoryQuery::new("john", DirectoryFilter::Assigned)),
        ("number_available", DirectoryQuery::new("4", DirectoryFilter::Available)),
    ];
    for (label, query) in &queries {
        group.bench_function(format!("builtin_view({label})"), |b| {
            b.iter(|| black_box(index.view(black_box(query), BoothId::new(1))));
        });
    }

    for &n in &[256_u32, 4_096_u32] {
        let catalog = synthetic_catalog(n);
        let index = DirectoryIndex::new(&catalog);
        let search = DirectoryQuery::new("grace", DirectoryFilter::Assigned);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("filtered", n), &search, |b, query| {
            b.iter(|| black_box(index.filtered(black_box(query))));
        });
        group.bench_with_input(BenchmarkId::new("view", n), &search, |b, query| {
            b.iter(|| black_box(index.view(black_box(query), None)));
        });
        group.bench_function(BenchmarkId::new("counts", n), |b| {
            b.iter(|| black_box(index.counts()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_directory);
criterion_main!(benches);
