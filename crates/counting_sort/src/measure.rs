use std::hint::black_box;
use std::time::Instant;

use rand::Rng;

use crate::error::reserve_exact;
use crate::{MeasureError, SortError, counting_sort};

pub const DEFAULT_TRIALS: usize = 5;

/// `len` keys drawn uniformly from `0..=bound`.
pub fn random_keys<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    bound: u64,
) -> Result<Vec<u64>, SortError> {
    let mut data = Vec::new();
    reserve_exact(&mut data, len)?;
    data.extend((0..len).map(|_| rng.random_range(0..=bound)));
    Ok(data)
}

/// Median of `samples`, averaging the middle pair for even lengths.
/// Reorders `samples` in place.
pub fn median(samples: &mut [f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(f64::total_cmp);
    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        Some(samples[mid])
    } else {
        Some((samples[mid - 1] + samples[mid]) / 2.0)
    }
}

/// Median wall time in milliseconds of sorting `trials` fresh random inputs
/// of length `len` with keys in `0..=bound`. Input generation is not timed.
pub fn measure_runtime<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    bound: u64,
    trials: usize,
) -> Result<f64, MeasureError> {
    if trials == 0 {
        return Err(MeasureError::NoTrials);
    }

    let mut timings = Vec::with_capacity(trials);
    for _ in 0..trials {
        let data = random_keys(rng, len, bound)?;
        let start = Instant::now();
        let sorted = counting_sort(&data, bound)?;
        let elapsed = start.elapsed();
        black_box(&sorted);
        timings.push(elapsed.as_secs_f64() * 1000.0);
    }

    median(&mut timings).ok_or(MeasureError::NoTrials)
}
