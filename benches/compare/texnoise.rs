use super::{GRID_SIZE, SIZE};
use criterion::{measurement::WallTime, *};
use texnoise::{
    GenerationCache, NoiseKind,
    cell_noise::WorleyMode,
    generate_cellular, generate_gradient, generate_white,
    params::{CellularParams, GradientParams, WhiteParams},
};

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("texnoise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    fbm_perlin(&mut group, 1);
    fbm_perlin(&mut group, 2);
    fbm_perlin(&mut group, 8);

    worley(&mut group, WorleyMode::F1);
    worley(&mut group, WorleyMode::Difference);

    group.bench_function("worley 64 scattered points", |bencher| {
        let params = CellularParams::default()
            .with_size(SIZE)
            .with_num_points(64);
        bencher.iter(|| generate_cellular(black_box(&params)));
    });

    group.bench_function("white", |bencher| {
        let params = WhiteParams::default().with_size(SIZE);
        bencher.iter(|| generate_white(black_box(&params)));
    });

    group.bench_function("cached fbm 4 octave perlin", |bencher| {
        let cache = GenerationCache::new();
        let kind = NoiseKind::Gradient(
            GradientParams::default()
                .with_size(SIZE)
                .with_grid_size(GRID_SIZE),
        );
        bencher.iter(|| cache.generate(black_box(&kind)));
    });
}

fn fbm_perlin(group: &mut BenchmarkGroup<WallTime>, octaves: u32) {
    let params = GradientParams::default()
        .with_size(SIZE)
        .with_grid_size(GRID_SIZE)
        .with_octaves(black_box(octaves))
        .with_persistence(0.5);
    group.bench_function(format!("fbm {octaves} octave perlin"), |bencher| {
        bencher.iter(|| generate_gradient(&params));
    });
}

fn worley(group: &mut BenchmarkGroup<WallTime>, mode: WorleyMode) {
    let params = CellularParams::default()
        .with_size(SIZE)
        .with_grid_size(GRID_SIZE)
        .with_mode(mode);
    group.bench_function(format!("worley {mode}"), |bencher| {
        bencher.iter(|| generate_cellular(black_box(&params)));
    });
}
