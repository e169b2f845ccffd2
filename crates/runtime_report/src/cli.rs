use std::path::PathBuf;

use clap::Parser;
use counting_sort::{DEFAULT_TRIALS, QUADRATIC_CAP, SweepConfig};

pub const DEFAULT_OUTPUT: &str = "counting_sort_runtime.png";

/// Check counting sort, then chart its runtime as input size and key range grow.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Timed trials per cell; the median is reported
    #[arg(long, default_value_t = DEFAULT_TRIALS, value_parser = parse_trials)]
    pub trials: usize,

    /// Seed for input generation (defaults to OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the runtime chart
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Upper limit for k under the n^2 policy
    #[arg(long, default_value_t = QUADRATIC_CAP)]
    pub quadratic_cap: u64,

    /// Print the table only; do not write the chart
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}

fn parse_trials(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("at least one trial is required".to_string()),
        Ok(trials) => Ok(trials),
        Err(err) => Err(err.to_string()),
    }
}

impl Args {
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            trials: self.trials,
            ..SweepConfig::default()
        }
        .with_quadratic_cap(self.quadratic_cap)
    }
}

#[cfg(test)]
mod tests {
    use counting_sort::{DEFAULT_POLICIES, INPUT_SIZES, KeyPolicy};

    use super::*;

    #[test]
    fn no_arguments_reproduce_defaults() {
        let args = Args::try_parse_from(["counting-sort-report"]).unwrap();
        assert_eq!(args.trials, 5);
        assert_eq!(args.seed, None);
        assert_eq!(args.output, PathBuf::from("counting_sort_runtime.png"));
        assert!(!args.no_plot);

        let config = args.sweep_config();
        assert_eq!(config.input_sizes, INPUT_SIZES.to_vec());
        assert_eq!(config.policies, DEFAULT_POLICIES.to_vec());
        assert_eq!(config.trials, 5);
    }

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "counting-sort-report",
            "--trials",
            "3",
            "--seed",
            "42",
            "--quadratic-cap",
            "5000",
            "-o",
            "out.png",
            "--no-plot",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert!(args.no_plot);

        let config = args.sweep_config();
        assert_eq!(config.trials, 3);
        assert_eq!(config.policies[2], KeyPolicy::QuadraticCapped(5000));
    }

    #[test]
    fn zero_trials_rejected() {
        assert!(Args::try_parse_from(["counting-sort-report", "--trials", "0"]).is_err());
    }
}
