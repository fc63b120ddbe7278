//! Benches this noise lib compared to others.
#![expect(
    missing_docs,
    reason = "Its a benchmark and cirterion macros don't add docs."
)]

mod noise;
mod texnoise;

use criterion::*;

criterion_main!(benches);
criterion_group!(benches, texnoise::benches, noise::benches);

const SIZE: u32 = 512;
const GRID_SIZE: u32 = 16;
