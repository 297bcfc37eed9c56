use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use solar_ephemeris::predict::{Direction, PredictionWindow, predict};
use solar_ephemeris::{SOLAR_ELEVATION_CIVIL_DUSK_DAWN, SOLAR_ELEVATION_SUNSET_SUNRISE, events, time};
use std::hint::black_box;

fn benchmark_seasons(c: &mut Criterion) {
    let t = time::julian_centuries_from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();

    c.bench_function("future_equinox", |b| {
        b.iter(|| events::future_equinox(black_box(t)))
    });

    c.bench_function("future_solstice", |b| {
        b.iter(|| events::future_solstice(black_box(t)))
    });
}

fn benchmark_daily_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_events");

    let t = time::julian_centuries_from_utc(2024, 3, 1, 0, 0, 0.0).unwrap();
    let lat = 59.33;
    let lon = 18.07;

    for (name, elevation) in [
        ("sunrise", SOLAR_ELEVATION_SUNSET_SUNRISE),
        ("civil_dawn", SOLAR_ELEVATION_CIVIL_DUSK_DAWN),
    ] {
        group.bench_with_input(BenchmarkId::new("future_elevation", name), &elevation, |b, &e| {
            b.iter(|| {
                events::future_elevation(black_box(lat), black_box(lon), black_box(e), black_box(t))
            })
        });
    }

    group.bench_function("future_culmination", |b| {
        b.iter(|| {
            events::future_elevation_derivative(
                black_box(lat),
                black_box(lon),
                black_box(0.0),
                black_box(t),
            )
        })
    });

    group.finish();
}

fn benchmark_unreachable_target(c: &mut Criterion) {
    // Worst case: the whole span is stepped through without a bracket
    let t = time::julian_centuries_from_utc(2024, 3, 1, 0, 0, 0.0).unwrap();

    c.bench_function("future_elevation_unreachable", |b| {
        b.iter(|| events::future_elevation(black_box(59.33), black_box(18.07), black_box(80.0), black_box(t)))
    });

    let window = PredictionWindow::towards(Direction::Future);
    c.bench_function("predict_linear", |b| {
        b.iter(|| predict(&window, black_box(2.0), |t| 1000.0 * t, black_box(0.0)))
    });
}

criterion_group!(
    benches,
    benchmark_seasons,
    benchmark_daily_events,
    benchmark_unreachable_target
);
criterion_main!(benches);
