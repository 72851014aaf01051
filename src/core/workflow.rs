//! Two-state edit workflow for a located record: Locked (read-only view)
//! and Unlocked (fields editable, changes staged off the dataset).

use crate::core::gate::{Access, Credential, Gate};
use crate::core::locator::AmbiguityPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::{Field, Record, RecordKey};
use crate::store::DatasetStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Locked,
    Unlocked { staged: Record },
}

/// Result of a successful commit.
#[derive(Debug, Clone)]
pub struct Committed {
    pub index: usize,
    /// Key of the row before the edit.
    pub key: RecordKey,
    pub record: Record,
}

#[derive(Debug, Clone)]
pub struct EditWorkflow {
    /// Row of the record in the dataset.
    index: usize,
    record: Record,
    state: EditState,
}

impl EditWorkflow {
    pub fn new(index: usize, record: Record) -> Self {
        Self {
            index,
            record,
            state: EditState::Locked,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The record as currently stored.
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, EditState::Locked)
    }

    pub fn staged(&self) -> Option<&Record> {
        match &self.state {
            EditState::Unlocked { staged } => Some(staged),
            EditState::Locked => None,
        }
    }

    /// Locked → Unlocked. Staging starts from the stored values.
    /// Already unlocked: staged values are kept.
    pub fn begin_edit(&mut self) {
        if self.is_locked() {
            self.state = EditState::Unlocked {
                staged: self.record.clone(),
            };
        }
    }

    pub fn stage(&mut self, field: Field, value: &str) -> AppResult<()> {
        match &mut self.state {
            EditState::Unlocked { staged } => staged.set(field, value),
            EditState::Locked => Err(AppError::NotEditing),
        }
    }

    /// Unlocked → Locked without saving. Returns false when nothing was staged.
    pub fn cancel(&mut self) -> bool {
        let was_unlocked = !self.is_locked();
        self.state = EditState::Locked;
        was_unlocked
    }

    /// Unlocked → Locked, writing the staged record through `store`.
    ///
    /// The selected row is written as long as it still has the key it had
    /// before the edit, so renaming the HR or the company never touches
    /// another row. On a rejected key
    /// or a failed update the workflow stays unlocked with staging intact.
    pub fn commit(
        &mut self,
        gate: &Gate,
        key: &Credential,
        store: &mut DatasetStore,
        policy: AmbiguityPolicy,
    ) -> AppResult<Committed> {
        let staged = match &self.state {
            EditState::Unlocked { staged } => staged.clone(),
            EditState::Locked => return Err(AppError::NotEditing),
        };

        if !gate.authorize(Access::Secret, key) {
            return Err(AppError::CredentialRejected);
        }

        let old_key = self.record.key();
        let index = store.update(self.index, &old_key, staged.clone(), policy)?;

        self.index = index;
        self.record = staged.clone();
        self.state = EditState::Locked;

        Ok(Committed {
            index,
            key: old_key,
            record: staged,
        })
    }
}
