use super::record::{Record, RecordKey};
use crate::core::locator::AmbiguityPolicy;
use crate::errors::{AppError, AppResult};

/// Ordered collection of records; the unit of load and sync.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row index of the record identified by `key`.
    pub fn position_of(&self, key: &RecordKey, policy: AmbiguityPolicy) -> AppResult<usize> {
        let hits: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches_key(key))
            .map(|(i, _)| i)
            .collect();

        match hits.as_slice() {
            [] => Err(AppError::NotFound {
                field: "record".into(),
                value: key.to_string(),
            }),
            [only] => Ok(*only),
            [first, ..] => match policy {
                AmbiguityPolicy::FirstMatch => Ok(*first),
                AmbiguityPolicy::Reject => Err(AppError::Ambiguous {
                    field: "record".into(),
                    value: key.to_string(),
                    count: hits.len(),
                }),
            },
        }
    }

    /// Row index for `key`, preferring `hint` when that row still carries it.
    pub fn resolve_row(
        &self,
        hint: usize,
        key: &RecordKey,
        policy: AmbiguityPolicy,
    ) -> AppResult<usize> {
        match self.records.get(hint) {
            Some(r) if r.matches_key(key) => Ok(hint),
            _ => self.position_of(key, policy),
        }
    }

    /// Replace the row at `index` in place; every other row is untouched.
    pub(crate) fn replace(&mut self, index: usize, record: Record) -> AppResult<()> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or_else(|| AppError::Other(format!("row {index} out of range")))?;
        *slot = record;
        Ok(())
    }
}
