//! Lookup throughput over a grid of zones.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use airspace_geofence::core::{ClassifierConfig, GeoPoint, Latitude, Longitude};
use airspace_geofence::geofence::GeofenceEngine;
use airspace_geofence::zones::{Attributes, RawGeometry, RawZoneRecord, ZoneStore};

/// `count` octagons laid out on a grid over Taiwan's bounding box.
fn zone_grid(count: usize) -> ZoneStore {
    let side = (count as f64).sqrt().ceil() as usize;
    let records: Vec<_> = (0..count)
        .map(|i| {
            let cx = 119.5 + 2.5 * (i % side) as f64 / side as f64;
            let cy = 21.9 + 3.4 * (i / side) as f64 / side as f64;
            let ring = (0..8)
                .map(|k| {
                    let angle = std::f64::consts::TAU * k as f64 / 8.0;
                    [cx + 0.02 * angle.cos(), cy + 0.02 * angle.sin()]
                })
                .collect();
            RawZoneRecord::new(
                RawGeometry::single(ring),
                Attributes::new().with("空域名稱", format!("zone-{}", i)),
            )
        })
        .collect();
    ZoneStore::build(&records, &ClassifierConfig::default()).into_store()
}

fn random_points(n: usize) -> Vec<GeoPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            GeoPoint::new(
                Longitude::new(rng.gen_range(119.5..122.0)),
                Latitude::new(rng.gen_range(21.9..25.3)),
            )
        })
        .collect()
}

fn bench_locate(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let points = random_points(1_000);
    let mut group = c.benchmark_group("locate");

    for count in [10usize, 100, 1_000] {
        let store = zone_grid(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            let engine = GeofenceEngine::new(store);
            b.iter(|| {
                for point in &points {
                    black_box(engine.locate(black_box(point)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
