use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_engine::{
    CalculationContext, KeplerConfig, ayanamsa, lunar_position, new_moon_jd, nutation,
    solar_position, solve_kepler,
};

fn position_bench(c: &mut Criterion) {
    let jd = 2_460_310.5;
    let kepler = KeplerConfig::default();

    let mut group = c.benchmark_group("positions");
    group.bench_function("moon", |b| b.iter(|| lunar_position(black_box(jd))));
    group.bench_function("sun", |b| b.iter(|| solar_position(black_box(jd), &kepler)));
    group.bench_function("context_evaluate", |b| {
        b.iter(|| {
            let mut ctx = CalculationContext::new(0.02, jd);
            ctx.evaluate(black_box(jd), &kepler)
        })
    });
    group.finish();
}

fn series_bench(c: &mut Criterion) {
    let jd = 2_460_310.5;

    let mut group = c.benchmark_group("series");
    group.bench_function("nutation", |b| b.iter(|| nutation(black_box(jd))));
    group.bench_function("ayanamsa", |b| b.iter(|| ayanamsa(black_box(jd))));
    group.bench_function("new_moon", |b| b.iter(|| new_moon_jd(black_box(1534))));
    group.bench_function("kepler_earth", |b| {
        b.iter(|| solve_kepler(black_box(123.4), 0.0167, &KeplerConfig::default()))
    });
    group.finish();
}

criterion_group!(benches, position_bench, series_bench);
criterion_main!(benches);
