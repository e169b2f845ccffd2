use std::collections::TryReserveError;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SortError {
    #[error("value out of range: {value} at index {index} exceeds key bound {bound}")]
    ValueOutOfRange { index: usize, value: u64, bound: u64 },
    #[error("key bound {bound} does not fit a count table in this address space")]
    KeyBoundTooLarge { bound: u64 },
    #[error("allocation of {len} slots failed")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

impl SortError {
    /// True when the sort could not obtain memory for its tables. Callers
    /// sweeping many inputs treat this as a per-input skip.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::KeyBoundTooLarge { .. } | Self::Allocation { .. })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MeasureError {
    #[error("at least one trial is required")]
    NoTrials,
    #[error(transparent)]
    Sort(#[from] SortError),
}

impl MeasureError {
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::Sort(err) if err.is_resource_exhaustion())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("sorted output {actual:?} does not match reference {expected:?}")]
    Mismatch { expected: Vec<u64>, actual: Vec<u64> },
    #[error("equal key {value} reordered: original index {later} placed before {earlier}")]
    Unstable {
        value: u64,
        earlier: usize,
        later: usize,
    },
}

pub(crate) fn reserve_exact<T>(buf: &mut Vec<T>, len: usize) -> Result<(), SortError> {
    buf.try_reserve_exact(len)
        .map_err(|source| SortError::Allocation { len, source })
}
