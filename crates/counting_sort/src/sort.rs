use crate::SortError;
use crate::error::reserve_exact;

/// Stable counting sort of `data`, every value of which must be `<= bound`.
///
/// The count table (`bound + 1` slots) and the output are allocated per call.
/// Values above `bound` are rejected before anything is written.
pub fn counting_sort(data: &[u64], bound: u64) -> Result<Vec<u64>, SortError> {
    let mut counts = cumulative_counts(data, bound)?;

    let mut out = Vec::new();
    reserve_exact(&mut out, data.len())?;
    out.resize(data.len(), 0);

    // Right to left: the later of two equal values takes the higher slot.
    for &value in data.iter().rev() {
        let slot = &mut counts[value as usize];
        *slot -= 1;
        out[*slot] = value;
    }

    Ok(out)
}

/// Stable counting sort of arbitrary records by a bounded `u64` key.
pub fn counting_sort_by_key<T, F>(items: &[T], bound: u64, key: F) -> Result<Vec<T>, SortError>
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    let mut counts = cumulative_counts_by(items, bound, &key)?;

    let mut order = Vec::new();
    reserve_exact(&mut order, items.len())?;
    order.resize(items.len(), 0usize);

    for (src, item) in items.iter().enumerate().rev() {
        let slot = &mut counts[key(item) as usize];
        *slot -= 1;
        order[*slot] = src;
    }

    let mut out = Vec::new();
    reserve_exact(&mut out, items.len())?;
    out.extend(order.into_iter().map(|src| items[src].clone()));
    Ok(out)
}

/// Frequency table of `data` turned into prefix sums: `counts[v]` is the
/// number of elements `<= v`, and the last slot equals `data.len()`.
pub fn cumulative_counts(data: &[u64], bound: u64) -> Result<Vec<usize>, SortError> {
    cumulative_counts_by(data, bound, |&value| value)
}

fn cumulative_counts_by<T, F>(items: &[T], bound: u64, key: F) -> Result<Vec<usize>, SortError>
where
    F: Fn(&T) -> u64,
{
    let slots = table_len(bound)?;
    let mut counts = Vec::new();
    reserve_exact(&mut counts, slots)?;
    counts.resize(slots, 0usize);

    for (index, item) in items.iter().enumerate() {
        let value = key(item);
        if value > bound {
            return Err(SortError::ValueOutOfRange {
                index,
                value,
                bound,
            });
        }
        counts[value as usize] += 1;
    }

    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    Ok(counts)
}

#[inline]
fn table_len(bound: u64) -> Result<usize, SortError> {
    usize::try_from(bound)
        .ok()
        .and_then(|b| b.checked_add(1))
        .ok_or(SortError::KeyBoundTooLarge { bound })
}
