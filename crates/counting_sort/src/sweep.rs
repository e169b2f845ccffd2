use std::fmt;

use rand::Rng;
use tracing::{debug, warn};

use crate::{DEFAULT_TRIALS, MeasureError, measure_runtime};

pub const INPUT_SIZES: [usize; 7] = [10, 100, 1000, 2000, 5000, 10000, 20000];
pub const CONSTANT_BOUND: u64 = 10;
pub const QUADRATIC_CAP: u64 = 1_000_000;

pub const DEFAULT_POLICIES: [KeyPolicy; 3] = [
    KeyPolicy::Constant(CONSTANT_BOUND),
    KeyPolicy::Linear,
    KeyPolicy::QuadraticCapped(QUADRATIC_CAP),
];

/// How the key bound `k` is derived from the input size `n`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeyPolicy {
    Constant(u64),
    Linear,
    /// `k = n^2`, clamped to the given cap.
    QuadraticCapped(u64),
}

impl KeyPolicy {
    pub fn bound_for(self, len: usize) -> u64 {
        let n = len as u64;
        match self {
            Self::Constant(k) => k,
            Self::Linear => n,
            Self::QuadraticCapped(cap) => n.saturating_mul(n).min(cap),
        }
    }
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(k) => f.pad(&k.to_string()),
            Self::Linear => f.pad("n"),
            Self::QuadraticCapped(_) => f.pad("n^2"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    pub input_sizes: Vec<usize>,
    pub policies: Vec<KeyPolicy>,
    pub trials: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            input_sizes: INPUT_SIZES.to_vec(),
            policies: DEFAULT_POLICIES.to_vec(),
            trials: DEFAULT_TRIALS,
        }
    }
}

impl SweepConfig {
    pub fn with_quadratic_cap(mut self, cap: u64) -> Self {
        for policy in &mut self.policies {
            if let KeyPolicy::QuadraticCapped(c) = policy {
                *c = cap;
            }
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellOutcome {
    Measured { median_ms: f64 },
    Skipped { reason: MeasureError },
}

/// One `(n, policy)` point of the sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub len: usize,
    pub policy: KeyPolicy,
    pub bound: u64,
    pub outcome: CellOutcome,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub policy: KeyPolicy,
    /// `(n, median ms)` in sweep order.
    pub points: Vec<(usize, f64)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepResults {
    pub series: Vec<Series>,
    pub skipped: Vec<(usize, KeyPolicy)>,
}

impl SweepResults {
    pub fn series(&self, policy: KeyPolicy) -> Option<&Series> {
        self.series.iter().find(|s| s.policy == policy)
    }
}

/// Measures every `(n, policy)` cell, sizes outer and policies inner.
///
/// `on_cell` sees each cell as soon as it finishes. Cells whose tables cannot
/// be allocated are recorded as skipped and the sweep moves on; any other
/// error aborts it.
pub fn run_sweep<R, F>(
    config: &SweepConfig,
    rng: &mut R,
    mut on_cell: F,
) -> Result<SweepResults, MeasureError>
where
    R: Rng + ?Sized,
    F: FnMut(&Cell),
{
    let mut results = SweepResults {
        series: config
            .policies
            .iter()
            .map(|&policy| Series {
                policy,
                points: Vec::with_capacity(config.input_sizes.len()),
            })
            .collect(),
        skipped: Vec::new(),
    };

    for &len in &config.input_sizes {
        for (slot, &policy) in config.policies.iter().enumerate() {
            let bound = policy.bound_for(len);
            let outcome = match measure_runtime(rng, len, bound, config.trials) {
                Ok(median_ms) => {
                    debug!(n = len, k = bound, %policy, median_ms, "measured cell");
                    results.series[slot].points.push((len, median_ms));
                    CellOutcome::Measured { median_ms }
                }
                Err(err) if err.is_resource_exhaustion() => {
                    warn!(n = len, k = bound, %policy, error = %err, "skipping cell");
                    results.skipped.push((len, policy));
                    CellOutcome::Skipped { reason: err }
                }
                Err(err) => return Err(err),
            };

            on_cell(&Cell {
                len,
                policy,
                bound,
                outcome,
            });
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn policy_bounds() {
        assert_eq!(KeyPolicy::Constant(10).bound_for(20000), 10);
        assert_eq!(KeyPolicy::Linear.bound_for(2000), 2000);
        assert_eq!(KeyPolicy::QuadraticCapped(QUADRATIC_CAP).bound_for(100), 10_000);
        assert_eq!(KeyPolicy::QuadraticCapped(QUADRATIC_CAP).bound_for(1000), 1_000_000);
        assert_eq!(KeyPolicy::QuadraticCapped(QUADRATIC_CAP).bound_for(5000), 1_000_000);
        assert_eq!(
            KeyPolicy::QuadraticCapped(u64::MAX).bound_for(usize::MAX),
            u64::MAX
        );
    }

    #[test]
    fn policy_labels() {
        let labels = DEFAULT_POLICIES.map(|p| p.to_string());
        assert_eq!(labels, ["10", "n", "n^2"]);
        assert_eq!(format!("{:<5}|", KeyPolicy::Linear), "n    |");
    }

    #[test]
    fn quadratic_cap_override() {
        let config = SweepConfig::default().with_quadratic_cap(50);
        assert_eq!(
            config.policies,
            vec![
                KeyPolicy::Constant(10),
                KeyPolicy::Linear,
                KeyPolicy::QuadraticCapped(50),
            ]
        );
    }

    #[test]
    fn sweep_records_every_cell_in_order() {
        let config = SweepConfig {
            input_sizes: vec![10, 100, 1000],
            policies: DEFAULT_POLICIES.to_vec(),
            trials: 3,
        };
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut seen = Vec::new();
        let results = run_sweep(&config, &mut rng, |cell| seen.push((cell.len, cell.policy)))
            .unwrap();

        assert_eq!(seen.len(), 9);
        assert_eq!(seen[0], (10, KeyPolicy::Constant(10)));
        assert_eq!(seen[1], (10, KeyPolicy::Linear));
        assert_eq!(seen[8], (1000, KeyPolicy::QuadraticCapped(QUADRATIC_CAP)));

        assert_eq!(results.series.len(), 3);
        assert!(results.skipped.is_empty());
        for series in &results.series {
            let sizes = series.points.iter().map(|&(n, _)| n).collect::<Vec<_>>();
            assert_eq!(sizes, config.input_sizes);
            assert!(series.points.iter().all(|&(_, ms)| ms >= 0.0));
        }
        assert!(results.series(KeyPolicy::Linear).is_some());
    }

    #[test]
    fn unallocatable_cells_are_skipped() {
        let huge = KeyPolicy::Constant(isize::MAX as u64 - 1);
        let config = SweepConfig {
            input_sizes: vec![10, 100],
            policies: vec![KeyPolicy::Linear, huge],
            trials: 1,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut skipped_cells = 0;
        let results = run_sweep(&config, &mut rng, |cell| {
            if matches!(cell.outcome, CellOutcome::Skipped { .. }) {
                skipped_cells += 1;
            }
        })
        .unwrap();

        assert_eq!(skipped_cells, 2);
        assert_eq!(results.skipped, vec![(10, huge), (100, huge)]);
        assert!(results.series(huge).unwrap().points.is_empty());
        let linear = results.series(KeyPolicy::Linear).unwrap();
        assert_eq!(linear.points.len(), 2);
    }

    #[test]
    fn zero_trials_aborts_sweep() {
        let config = SweepConfig {
            trials: 0,
            ..SweepConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            run_sweep(&config, &mut rng, |_| {}),
            Err(MeasureError::NoTrials)
        );
    }
}
