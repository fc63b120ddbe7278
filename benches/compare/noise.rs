use super::{GRID_SIZE, SIZE};
use criterion::{measurement::WallTime, *};
use noise::{self as noise_rs, Fbm, MultiFractal, Worley, core::worley::ReturnType};
use noise_rs::{NoiseFn, Perlin};

#[inline]
fn bench_2d(noise: &impl NoiseFn<f64, 2>) -> f64 {
    let mut res = 0.0;
    for x in 0..SIZE {
        for y in 0..SIZE {
            res += noise.get([x as f64, y as f64]);
        }
    }
    res
}

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    fbm_perlin(&mut group, 1);
    fbm_perlin(&mut group, 2);
    fbm_perlin(&mut group, 8);

    group.bench_function("worley distance", |bencher| {
        bencher.iter(|| {
            let noise = Worley::new(1)
                .set_frequency(GRID_SIZE as f64 / SIZE as f64)
                .set_return_type(ReturnType::Distance);
            bench_2d(&noise)
        });
    });
}

fn fbm_perlin(group: &mut BenchmarkGroup<WallTime>, octaves: u32) {
    let octaves = black_box(octaves);
    group.bench_function(format!("fbm {octaves} octave perlin"), |bencher| {
        bencher.iter(|| {
            let noise = Fbm::<Perlin>::new(1)
                .set_octaves(octaves as usize)
                .set_frequency(GRID_SIZE as f64 / SIZE as f64)
                .set_lacunarity(2.0)
                .set_persistence(0.5);
            bench_2d(&noise)
        });
    });
}
