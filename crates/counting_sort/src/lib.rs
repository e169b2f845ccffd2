//! Stable counting sort over bounded `u64` keys, plus the correctness checks,
//! runtime measurer and key-range sweep used to study its `O(n + k)` cost.

mod checks;
mod error;
mod measure;
mod sort;
mod sweep;

pub use checks::{
    BASIC_FIXTURE, CheckReport, STABILITY_FIXTURE, basic_check, stability_check, verify_sorted,
    verify_stable,
};
pub use error::{CheckError, MeasureError, SortError};
pub use measure::{DEFAULT_TRIALS, measure_runtime, median, random_keys};
pub use sort::{counting_sort, counting_sort_by_key, cumulative_counts};
pub use sweep::{
    CONSTANT_BOUND, Cell, CellOutcome, DEFAULT_POLICIES, INPUT_SIZES, KeyPolicy, QUADRATIC_CAP,
    Series, SweepConfig, SweepResults, run_sweep,
};
