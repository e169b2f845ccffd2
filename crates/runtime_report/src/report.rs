use std::fmt::Debug;

use counting_sort::{Cell, CellOutcome, CheckReport};

pub fn check_lines<T: Debug>(
    report: &CheckReport<T>,
    input_label: &str,
    output_label: &str,
) -> [String; 2] {
    [
        format!("{input_label}: {:?}", report.input),
        format!("{output_label}: {:?}", report.output),
    ]
}

pub fn table_header() -> String {
    format!("{:<8}{:<10}{:<20}\n{}", "n", "k", "Median Time (ms)", "-".repeat(40))
}

pub fn table_row(cell: &Cell) -> String {
    match &cell.outcome {
        CellOutcome::Measured { median_ms } => {
            format!("{:<8}{:<10}{:<20.3}", cell.len, cell.policy, median_ms)
        }
        CellOutcome::Skipped { .. } => {
            format!("{:<8}{:<10}Skipped (allocation failure)", cell.len, cell.policy)
        }
    }
}
