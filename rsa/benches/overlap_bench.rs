use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use diskpack::entities::{DiskLayout, Sheet};
use diskpack::geometry::primitives::Disk;
use diskpack::util::{CDEConfig, SpatialIndexConfig};
use rand::prelude::SmallRng;
use rand::SeedableRng;
use rsa::config::RSAConfig;
use rsa::opt;
use rsa::opt::stop_criterion::StopCriterion;
use rsa::samplers::uniform_rect_sampler::{CoordinateSnap, UniformRectSampler};

criterion_main!(benches);
criterion_group!(benches, overlap_query_bench, full_run_bench);

const N_SAMPLES: usize = 1000;

const INDEX_CONFIGS: [(&str, SpatialIndexConfig); 4] = [
    ("naive", SpatialIndexConfig::Naive),
    ("kd_tree", SpatialIndexConfig::KdTree),
    ("grid", SpatialIndexConfig::Grid { cell_size: None }),
    ("grid_fine", SpatialIndexConfig::Grid { cell_size: Some(5.0) }),
];

fn bench_config() -> RSAConfig {
    RSAConfig {
        sheet_width: 300.0,
        sheet_height: 300.0,
        max_attempts: 200,
        stop_criterion: StopCriterion::SkipBudget { total_skips: 50 },
        prng_seed: Some(0),
        ..RSAConfig::default()
    }
}

/// Queries a dense layout, created by a full run, with random candidates
fn overlap_query_bench(c: &mut Criterion) {
    let config = bench_config();
    let sol = opt::run(&config).unwrap();
    let sheet = Sheet::try_new(config.sheet_width, config.sheet_height).unwrap();
    let sampler = UniformRectSampler::new(&sheet, 5.0, CoordinateSnap::None).unwrap();

    let mut group = c.benchmark_group("overlap_query");
    for (name, spatial_index) in INDEX_CONFIGS {
        let mut layout = DiskLayout::new(sheet, CDEConfig { spatial_index }, 15.0).unwrap();
        sol.disks.iter().for_each(|d| {
            layout.place(*d);
        });
        let mut rng = SmallRng::seed_from_u64(0);

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                let mut n_free = 0;
                for _ in 0..N_SAMPLES {
                    let candidate = Disk::new(sampler.sample(&mut rng), 5.0);
                    if !layout.overlaps(&candidate) {
                        n_free += 1;
                    }
                }
                n_free
            })
        });
    }
    group.finish();
}

/// A complete run for each overlap checker
fn full_run_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);
    for (name, spatial_index) in INDEX_CONFIGS {
        let mut config = bench_config();
        config.cde_config.spatial_index = spatial_index;
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| opt::run(&config).unwrap().disks.len())
        });
    }
    group.finish();
}
