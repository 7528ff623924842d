// Criterion benchmarks for Listing Geo

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use listing_geo::core::{filter_by_radius, haversine_distance, ListingSearch};
use listing_geo::models::{Coordinate, CoordinateFields, ListingKind, ListingQuery, ListingRecord};

const SINGAPORE: Coordinate = Coordinate { latitude: 1.3521, longitude: 103.8198 };

fn create_listing(id: usize) -> ListingRecord {
    let lat_offset = (id as f64 * 0.001) % 0.3;
    let lon_offset = (id as f64 * 0.0013) % 0.4;

    let record = ListingRecord::new()
        .with("Apartment Name", format!("Block {}", id))
        .with("latitude", format!("{:.6}", 1.20 + lat_offset));

    // Every tenth listing is missing its longitude
    if id % 10 == 0 {
        record.with("longitude", "")
    } else {
        record.with("longitude", format!("{:.6}", 103.60 + lon_offset))
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(1.3521),
                black_box(103.8198),
                black_box(1.4000),
                black_box(103.9000),
            )
        });
    });
}

fn bench_filter_by_radius(c: &mut Criterion) {
    let fields = CoordinateFields::long_form();
    let mut group = c.benchmark_group("filter_by_radius");

    for count in [100, 1_000, 10_000].iter() {
        let listings: Vec<ListingRecord> = (0..*count).map(create_listing).collect();

        group.bench_with_input(BenchmarkId::new("listings", count), count, |b, _| {
            b.iter(|| {
                filter_by_radius(
                    black_box(&listings),
                    black_box(SINGAPORE),
                    black_box(10_000.0),
                    |r| r.coordinate(&fields),
                )
            });
        });
    }

    group.finish();
}

fn bench_search_pipeline(c: &mut Criterion) {
    let search = ListingSearch::with_default_fields();
    let listings: Vec<ListingRecord> = (0..1_000).map(create_listing).collect();
    let query = ListingQuery::within(SINGAPORE, 10_000.0);

    c.bench_function("search_pipeline_1000_listings", |b| {
        b.iter(|| {
            search.search(
                black_box(ListingKind::AuctionListing),
                black_box(listings.clone()),
                black_box(&query),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_filter_by_radius,
    bench_search_pipeline
);

criterion_main!(benches);
