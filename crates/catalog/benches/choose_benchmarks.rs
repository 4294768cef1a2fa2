use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use toyraffle_catalog::{Catalog, FixedDraw, ItemSpec, RngDraw};

fn catalog_of(size: u32) -> Catalog {
    Catalog::from_specs((1..=size).map(|id| {
        ItemSpec::new(id, format!("Toy {id}"), u32::MAX, f64::from(id % 50 + 1))
    }))
    .unwrap()
}

fn bench_choose_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_latency");

    // Benchmark: the three-item sample catalog with a real generator
    group.bench_function("sample_catalog_seeded", |b| {
        let mut catalog = Catalog::from_specs([
            ItemSpec::new(1, "Teddy Bear", u32::MAX, 25.0),
            ItemSpec::new(2, "Toy Car", u32::MAX, 20.0),
            ItemSpec::new(3, "Doll", u32::MAX, 15.0),
        ])
        .unwrap();
        let mut source = RngDraw::seeded(7);
        b.iter(|| black_box(catalog.choose(&mut source)));
    });

    // Benchmark: worst case, the draw lands on the last item
    group.bench_function("last_band_fixed", |b| {
        let catalog = catalog_of(100);
        let last = catalog.total_weight() - 0.5;
        b.iter_batched(
            || catalog.clone(),
            |mut catalog| black_box(catalog.choose(&mut FixedDraw(last))),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_choose_by_catalog_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_by_catalog_size");
    group.throughput(Throughput::Elements(1));

    for size in [3u32, 10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("seeded_draw", size), size, |b, &size| {
            let mut catalog = catalog_of(size);
            let mut source = RngDraw::seeded(u64::from(size));
            b.iter(|| black_box(catalog.choose(&mut source)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_choose_latency, bench_choose_by_catalog_size);
criterion_main!(benches);
