//! Benchmarks pour la conception de barcodes

use bcd_core::{edit_distance, BarcodeDesigner, BarcodeSet, DesignConfig, SequenceGenerator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn benchmark_edit_distance(c: &mut Criterion) {
    let pairs: Vec<_> = SequenceGenerator::seeded(11, 42)
        .take(200)
        .collect::<Vec<_>>()
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();

    c.bench_function("edit_distance_11bp", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(edit_distance(x.as_bytes(), y.as_bytes()));
            }
        });
    });
}

fn benchmark_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("Design Performance");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for count in [24usize, 96] {
        group.bench_function(format!("design_{}x11bp_d3", count), |b| {
            b.iter(|| {
                let config = DesignConfig::new(count, 11, 3).with_seed(7);
                let mut designer = BarcodeDesigner::new(config).unwrap();
                black_box(designer.design(&BarcodeSet::new()).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!{
    name = design_benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(3));
    targets = benchmark_edit_distance, benchmark_design
}

criterion_main!(design_benches);
