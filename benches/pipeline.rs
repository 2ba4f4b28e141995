use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cursorkit::{adapter::Join, prelude::*};

fn bench_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("source");
    let data: Vec<u64> = (0..10_000).collect();
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("slice_cursor", |b| {
        b.iter(|| {
            let mut iter = SliceIterator::new(black_box(&data));
            let mut sum = 0u64;
            while iter.next() {
                sum += iter.get().unwrap_or_default();
            }
            sum
        });
    });

    group.bench_function("range", |b| {
        b.iter(|| range!(0u64, black_box(9_999)).values().sum::<u64>());
    });

    // Baseline for the cursor bridge
    group.bench_function("std_iter", |b| {
        b.iter(|| black_box(&data).iter().sum::<u64>());
    });

    group.finish();
}

fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for len in [1_000u64, 100_000] {
        group.throughput(Throughput::Elements(len));

        group.bench_with_input(BenchmarkId::new("filter_map_take", len), &len, |b, &len| {
            b.iter(|| {
                range!(0, len - 1)
                    .take_if(|x| x % 3 == 0)
                    .transform_infallible(|x| x * 2)
                    .take_n(black_box(len as usize / 10))
                    .materialize()
            });
        });

        group.bench_with_input(BenchmarkId::new("drop_strided", len), &len, |b, &len| {
            b.iter(|| range!(0, len - 1).drop_n(black_box(10)).strided(7).materialize());
        });

        group.bench_with_input(BenchmarkId::new("fallible_transform", len), &len, |b, &len| {
            b.iter(|| {
                range!(0, len - 1)
                    .transform(|x| x.checked_mul(3).ok_or(std::fmt::Error))
                    .try_materialize()
            });
        });

        group.bench_with_input(BenchmarkId::new("join4", len), &len, |b, &len| {
            let quarter = len / 4;
            b.iter(|| {
                let inners = (0..4).map(|i| range!(i * quarter, (i + 1) * quarter - 1)).collect();
                Join::new(inners).values().count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sources, bench_pipelines);
criterion_main!(benches);
