use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SMALL_INPUT_MAX: usize = 1000;
const MEDIUM_INPUT_MAX: usize = 5000;

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 300;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 600;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 500;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

/// Picks sample count and timing budget by input length.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    let (samples, warm_up_ms, measure_ms, mode) = if len <= SMALL_INPUT_MAX {
        (
            SMALL_RUNTIME_SAMPLE_SIZE,
            SMALL_RUNTIME_WARM_UP_MS,
            SMALL_RUNTIME_MEASURE_MS,
            SamplingMode::Auto,
        )
    } else if len <= MEDIUM_INPUT_MAX {
        (
            MEDIUM_RUNTIME_SAMPLE_SIZE,
            MEDIUM_RUNTIME_WARM_UP_MS,
            MEDIUM_RUNTIME_MEASURE_MS,
            SamplingMode::Auto,
        )
    } else {
        (
            LARGE_RUNTIME_SAMPLE_SIZE,
            LARGE_RUNTIME_WARM_UP_MS,
            LARGE_RUNTIME_MEASURE_MS,
            SamplingMode::Flat,
        )
    };

    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
    group.sampling_mode(mode);
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Deterministic per-case RNG, so adding a case does not shift the inputs of
/// the others.
pub fn rng_for(len: usize, salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ (len as u64) ^ salt.rotate_left(32)))
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn per_case_rngs_are_reproducible_and_distinct() {
        let a = rng_for(1000, 1).random::<u64>();
        let b = rng_for(1000, 1).random::<u64>();
        let c = rng_for(1000, 2).random::<u64>();
        let d = rng_for(2000, 1).random::<u64>();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn default_rng_is_fixed() {
        assert_eq!(default_rng().random::<u64>(), default_rng().random::<u64>());
    }
}
