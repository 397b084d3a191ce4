//! Picks the first `k` decodable roots in ascending index order.

use std::num::NonZeroUsize;

use math::DecodeError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::record::RootRecord;

/// Result type specialized for root selection.
pub type SelectionResult<T> = Result<T, SelectionError>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("failed to decode root at index {index}: {source}")]
    RootDecodeFailed {
        index: usize,
        #[source]
        source: DecodeError,
    },
    #[error("Not enough roots: found {found}, need {needed}")]
    InsufficientRoots { found: usize, needed: usize },
}

/// The roots chosen for synthesis, paired with the index each came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectedRoots {
    indices: Vec<usize>,
    values: Vec<i64>,
}

impl SelectedRoots {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, index: usize, value: i64) {
        self.indices.push(index);
        self.values.push(value);
    }

    /// Decoded root values in selection order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Source index of each selected root.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}

/// Decode records in order until `k` roots have been collected.
///
/// The iterator is not advanced past the `k`-th success, so later records are
/// never decoded. The first record that fails to decode aborts the whole
/// selection.
pub fn select_roots<I>(records: I, k: NonZeroUsize) -> SelectionResult<SelectedRoots>
where
    I: IntoIterator<Item = RootRecord>,
{
    let needed = k.get();
    let mut selected = SelectedRoots::with_capacity(needed);

    for record in records {
        let value = record.decode().map_err(|source| {
            SelectionError::RootDecodeFailed {
                index: record.index,
                source,
            }
        })?;
        debug!(
            index = record.index,
            base = record.base,
            literal = %record.literal,
            value,
            "decoded root"
        );
        selected.push(record.index, value);

        if selected.len() == needed {
            info!(k = needed, indices = ?selected.indices, "selected roots");
            return Ok(selected);
        }
    }

    Err(SelectionError::InsufficientRoots {
        found: selected.len(),
        needed,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn k(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn skips_absent_indices() {
        // Index 2 is missing from the document.
        let records = vec![
            RootRecord::new(1, 10, "4"),
            RootRecord::new(3, 2, "111"),
        ];
        let selected = select_roots(records, k(2)).unwrap();
        assert!(!selected.is_empty());
        assert_eq!(selected.len(), 2);
        assert_eq!(selected.values(), &[4, 7]);
        assert_eq!(selected.indices(), &[1, 3]);
        assert_eq!(selected.iter().collect::<Vec<_>>(), vec![(1, 4), (3, 7)]);
    }

    #[test]
    fn takes_only_the_first_k() {
        let records = vec![
            RootRecord::new(1, 10, "1"),
            RootRecord::new(2, 10, "2"),
            RootRecord::new(3, 10, "3"),
        ];
        let selected = select_roots(records, k(2)).unwrap();
        assert_eq!(selected.into_values(), vec![1, 2]);
    }

    #[test]
    fn fails_when_too_few_records_are_located() {
        let records = vec![RootRecord::new(2, 10, "5")];
        let err = select_roots(records, k(3)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientRoots {
                found: 1,
                needed: 3
            }
        );
    }

    #[test]
    fn empty_input_is_insufficient() {
        let err = select_roots(Vec::new(), k(1)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientRoots {
                found: 0,
                needed: 1
            }
        );
    }

    #[test]
    fn first_decode_failure_aborts() {
        let records = vec![
            RootRecord::new(1, 10, "1"),
            RootRecord::new(2, 2, "2"),
            RootRecord::new(3, 10, "3"),
        ];
        let err = select_roots(records, k(2)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::RootDecodeFailed {
                index: 2,
                source: DecodeError::DigitOutOfRange {
                    ch: '2',
                    digit: 2,
                    base: 2
                },
            }
        );
        assert_eq!(
            err.to_string(),
            "failed to decode root at index 2: digit '2' (value 2) is out of range for base 2"
        );
    }

    #[test]
    fn negative_base_aborts_instead_of_skipping() {
        let records = vec![
            RootRecord::new(1, -2, "1"),
            RootRecord::new(2, 10, "5"),
            RootRecord::new(3, 10, "6"),
        ];
        let err = select_roots(records, k(2)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::RootDecodeFailed {
                index: 1,
                source: DecodeError::DigitOutOfRange {
                    ch: '1',
                    digit: 1,
                    base: -2
                },
            }
        );
    }

    #[test]
    fn default_selection_is_empty() {
        let selected = SelectedRoots::default();
        assert!(selected.is_empty());
        assert_eq!(selected.len(), 0);
    }

    #[test]
    fn records_after_the_kth_are_never_pulled() {
        let pulled = Cell::new(0usize);
        let records = [
            RootRecord::new(1, 10, "1"),
            RootRecord::new(2, 10, "2"),
            RootRecord::new(3, 10, "not a number"),
        ]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

        let selected = select_roots(records, k(2)).unwrap();
        assert_eq!(selected.values(), &[1, 2]);
        assert_eq!(pulled.get(), 2);
    }
}
