use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coord_processor::converters::{decimal_to_dms, dms_to_decimal, format_pair, ConversionPolicy};
use coord_processor::models::{Axis, LocationRow};
use coord_processor::parsers::DmsParser;
use coord_processor::processors::{BatchMapper, Direction};

// Create test rows spread across both hemispheres
fn create_test_rows(count: usize) -> Vec<LocationRow> {
    (0..count)
        .map(|i| {
            let latitude = -89.0 + (i as f64 * 0.37) % 178.0;
            let longitude = -179.0 + (i as f64 * 0.73) % 358.0;
            let policy = ConversionPolicy::default();
            let lat_dms = decimal_to_dms(latitude, Axis::Latitude).unwrap();
            let lon_dms = decimal_to_dms(longitude, Axis::Longitude).unwrap();
            LocationRow::new(Some(format_pair(&lat_dms, &lon_dms, &policy)), None, None)
        })
        .collect()
}

fn benchmark_parsing(c: &mut Criterion) {
    let parser = DmsParser::new();

    c.bench_function("parse_pair", |b| {
        b.iter(|| parser.parse_pair(black_box("34°22'05.6\"S 71°01'53.0\"W")))
    });
}

fn benchmark_conversion(c: &mut Criterion) {
    c.bench_function("decimal_to_dms", |b| {
        b.iter(|| decimal_to_dms(black_box(-34.36822222), Axis::Latitude))
    });

    let dms = decimal_to_dms(-34.36822222, Axis::Latitude).unwrap();
    c.bench_function("dms_to_decimal", |b| b.iter(|| dms_to_decimal(black_box(&dms))));
}

fn benchmark_batch_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_mapping");

    for size in [100, 1000, 10000] {
        let rows = create_test_rows(size);
        let mapper = BatchMapper::new();

        group.bench_with_input(BenchmarkId::new("text_to_decimal", size), &rows, |b, rows| {
            b.iter(|| mapper.map_rows(black_box(rows), Direction::TextToDecimal))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_conversion,
    benchmark_batch_mapping
);
criterion_main!(benches);
