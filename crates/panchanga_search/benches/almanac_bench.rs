use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_search::{AlmanacConfig, calculate, nakshatra_for, positions_at, tithi_for};
use panchanga_time::CivilTime;

fn almanac_bench(c: &mut Criterion) {
    let t = match CivilTime::new(2024, 4, 15, 12, 0, 0.0, 5.5) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Skipping benchmarks: {e}");
            return;
        }
    };
    let config = AlmanacConfig::default();

    let mut group = c.benchmark_group("almanac");
    group.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box(&t)).expect("calculate should succeed"))
    });
    group.bench_function("tithi_for", |b| {
        b.iter(|| tithi_for(black_box(&t), &config).expect("tithi should succeed"))
    });
    group.bench_function("nakshatra_for", |b| {
        b.iter(|| nakshatra_for(black_box(&t), &config).expect("nakshatra should succeed"))
    });
    group.finish();
}

fn snapshot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    group.bench_function("positions_at", |b| {
        b.iter(|| positions_at(black_box(2_460_409.5)))
    });
    group.finish();
}

criterion_group!(benches, almanac_bench, snapshot_bench);
criterion_main!(benches);
