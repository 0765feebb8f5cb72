use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sky_time::{DeltaT, EspenakMeeus, Moment, UtcTime, calendar_to_jd, local_sidereal_time_hours};

fn julian_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("julian");
    group.bench_function("calendar_to_jd", |b| {
        b.iter(|| calendar_to_jd(black_box(2024), black_box(3), black_box(20.5)))
    });
    group.bench_function("moment_dynamical", |b| {
        let utc = UtcTime::new(2024, 3, 20, 12, 0, 0.0);
        b.iter(|| Moment::from_utc(black_box(utc), Some(&EspenakMeeus)))
    });
    group.finish();
}

fn sidereal_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;
    let mut group = c.benchmark_group("sidereal");
    group.bench_function("lst", |b| {
        b.iter(|| local_sidereal_time_hours(black_box(jd), black_box(-74.0)))
    });
    group.bench_function("delta_t", |b| {
        b.iter(|| EspenakMeeus.delta_t_seconds(black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, julian_bench, sidereal_bench);
criterion_main!(benches);
