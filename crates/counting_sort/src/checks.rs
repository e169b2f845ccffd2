use crate::{CheckError, counting_sort, counting_sort_by_key};

pub const BASIC_FIXTURE: [u64; 7] = [4, 2, 2, 8, 3, 3, 1];

/// `(value, original index)` pairs with two runs of equal values.
pub const STABILITY_FIXTURE: [(u64, usize); 6] = [(4, 0), (2, 1), (2, 2), (3, 3), (3, 4), (1, 5)];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckReport<T> {
    pub input: Vec<T>,
    pub output: Vec<T>,
}

pub fn basic_check() -> Result<CheckReport<u64>, CheckError> {
    verify_sorted(&BASIC_FIXTURE)
}

pub fn stability_check() -> Result<CheckReport<(u64, usize)>, CheckError> {
    verify_stable(&STABILITY_FIXTURE)
}

/// Sorts `data` with `k = max(data)` and compares against the std sort.
pub fn verify_sorted(data: &[u64]) -> Result<CheckReport<u64>, CheckError> {
    let bound = data.iter().copied().max().unwrap_or(0);
    let output = counting_sort(data, bound)?;

    let mut expected = data.to_vec();
    expected.sort_unstable();
    if output != expected {
        return Err(CheckError::Mismatch {
            expected,
            actual: output,
        });
    }

    Ok(CheckReport {
        input: data.to_vec(),
        output,
    })
}

/// Sorts `(value, original index)` pairs by value and checks that the values
/// come out ordered and that equal values keep ascending original indices.
pub fn verify_stable(pairs: &[(u64, usize)]) -> Result<CheckReport<(u64, usize)>, CheckError> {
    let values = pairs.iter().map(|&(value, _)| value).collect::<Vec<_>>();
    let bound = values.iter().copied().max().unwrap_or(0);

    let mut expected = values.clone();
    expected.sort_unstable();

    let sorted_values = counting_sort(&values, bound)?;
    if sorted_values != expected {
        return Err(CheckError::Mismatch {
            expected,
            actual: sorted_values,
        });
    }

    let output = counting_sort_by_key(pairs, bound, |&(value, _)| value)?;
    let actual = output.iter().map(|&(value, _)| value).collect::<Vec<_>>();
    if actual != expected {
        return Err(CheckError::Mismatch { expected, actual });
    }
    if let Some(err) = first_reordering(&output) {
        return Err(err);
    }

    Ok(CheckReport {
        input: pairs.to_vec(),
        output,
    })
}

fn first_reordering(sorted: &[(u64, usize)]) -> Option<CheckError> {
    sorted.windows(2).find_map(|w| {
        let (value, before) = w[0];
        let (next_value, after) = w[1];
        (value == next_value && before > after).then_some(CheckError::Unstable {
            value,
            earlier: after,
            later: before,
        })
    })
}
