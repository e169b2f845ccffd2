mod cli;
mod plot;
mod report;

use anyhow::Context;
use clap::Parser;
use counting_sort::{basic_check, run_sweep, stability_check};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

const DEFAULT_LOG_FILTER: &str = "counting_sort=info,counting_sort_report=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let basic = basic_check().context("counting sort failed the basic fixture")?;
    let [input, output] = report::check_lines(&basic, "Original array", "Sorted array");
    println!("{input}\n{output}");
    println!("Counting Sort test passed!\n");

    let stable = stability_check().context("counting sort failed the stability fixture")?;
    let [input, output] =
        report::check_lines(&stable, "Stability Test Input", "Stability Test Output");
    println!("{input}\n{output}");
    println!("Counting Sort stability confirmed!\n");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let config = args.sweep_config();
    info!(
        sizes = ?config.input_sizes,
        trials = config.trials,
        seed = ?args.seed,
        "starting sweep"
    );

    println!("Counting Sort Runtime Results:\n");
    println!("{}", report::table_header());
    let results = run_sweep(&config, &mut rng, |cell| {
        println!("{}", report::table_row(cell));
    })
    .context("runtime sweep aborted")?;
    println!("\nAll tests completed!\n");

    if !results.skipped.is_empty() {
        info!(cells = results.skipped.len(), "some cells were skipped");
    }

    if args.no_plot {
        return Ok(());
    }
    plot::render_png(&results, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(path = %args.output.display(), "wrote runtime chart");

    Ok(())
}
