//! Session context: everything one interactive session works on, created at
//! session start and dropped at the end.

use crate::config::Config;
use crate::core::gate::{Access, Credential, Gate};
use crate::core::locator::{AmbiguityPolicy, Selector, locate};
use crate::core::sync::{Receipt, SyncError};
use crate::core::workflow::{Committed, EditWorkflow};
use crate::db::log::jhlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Field};
use crate::store::{DatasetStore, LoadSource};
use crate::ui::messages::warning;

/// Outcome of selecting a record.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub index: usize,
    /// How many records matched; more than one means the first was taken.
    pub matched: usize,
}

/// A commit and what happened when pushing it to the remote.
#[derive(Debug)]
pub struct CommitReport {
    pub committed: Committed,
    pub sync: Result<Receipt, SyncError>,
}

pub struct Session {
    store: DatasetStore,
    gate: Gate,
    entered: Credential,
    policy: AmbiguityPolicy,
    audit: Option<DbPool>,
    workflow: Option<EditWorkflow>,
}

impl Session {
    /// Check the entry key, then load the dataset (once).
    pub fn start(
        mut store: DatasetStore,
        gate: Gate,
        entered: Credential,
        policy: AmbiguityPolicy,
    ) -> AppResult<Self> {
        if !gate.authorize(Access::Entry, &entered) {
            return Err(AppError::AccessDenied);
        }
        store.load()?;

        Ok(Self {
            store,
            gate,
            entered,
            policy,
            audit: None,
            workflow: None,
        })
    }

    /// Build a session from the configuration, with the audit log attached.
    pub fn open(cfg: &Config, entered: Credential, offline: bool) -> AppResult<Self> {
        let gate = Gate::from_config(cfg);
        if !gate.has_secret() {
            warning("No valid secret_key configured: records can be viewed but not saved.");
        }
        let store = DatasetStore::from_config(cfg).offline(offline);
        let session = Self::start(store, gate, entered, cfg.ambiguity)?;

        let audit = match DbPool::new(&cfg.audit_database) {
            Ok(pool) => Some(pool),
            Err(e) => {
                warning(format!("Audit log unavailable: {e}"));
                None
            }
        };
        let mut session = session.with_audit(audit);

        let rows = session.dataset()?.len();
        let source = match session.store.source() {
            Some(LoadSource::Remote) => "remote",
            Some(LoadSource::PendingLocal) => "local copy, sync pending",
            Some(LoadSource::Offline) => "offline",
            None => "unknown",
        };
        session.audit("load", &cfg.dataset_object_id, &format!("{rows} records ({source})"));
        Ok(session)
    }

    pub fn with_audit(mut self, audit: Option<DbPool>) -> Self {
        self.audit = audit;
        self
    }

    pub fn dataset(&self) -> AppResult<&Dataset> {
        self.store.dataset()
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// True when the session was opened with the secret key.
    pub fn is_privileged(&self) -> bool {
        self.gate.authorize(Access::Secret, &self.entered)
    }

    /// Locate a record and show it locked. Replaces any previous selection,
    /// dropping its staged edits.
    pub fn select(&mut self, selector: Selector, value: &str) -> AppResult<Selection> {
        let dataset = self.store.dataset()?;
        let matches = locate(dataset, selector, value);
        let hit = matches.resolve(self.policy)?;

        let selection = Selection {
            index: hit.index,
            matched: matches.len(),
        };
        self.workflow = Some(EditWorkflow::new(hit.index, hit.record.clone()));
        Ok(selection)
    }

    pub fn current(&self) -> Option<&EditWorkflow> {
        self.workflow.as_ref()
    }

    fn current_mut(&mut self) -> AppResult<&mut EditWorkflow> {
        self.workflow.as_mut().ok_or(AppError::NoSelection)
    }

    pub fn begin_edit(&mut self) -> AppResult<()> {
        self.current_mut()?.begin_edit();
        Ok(())
    }

    pub fn stage(&mut self, field: Field, value: &str) -> AppResult<()> {
        self.current_mut()?.stage(field, value)
    }

    pub fn cancel(&mut self) -> AppResult<bool> {
        Ok(self.current_mut()?.cancel())
    }

    /// Save the staged edit, then push the new snapshot to the remote.
    ///
    /// A sync failure is reported in the returned report and never undoes
    /// the local write.
    pub fn commit(&mut self, key: &Credential) -> AppResult<CommitReport> {
        let workflow = self.workflow.as_mut().ok_or(AppError::NoSelection)?;

        let committed = match workflow.commit(&self.gate, key, &mut self.store, self.policy) {
            Ok(c) => c,
            Err(e) => {
                if matches!(e, AppError::CredentialRejected) {
                    self.audit("commit_rejected", "", "invalid secret key");
                }
                return Err(e);
            }
        };

        self.audit(
            "commit",
            &committed.key.to_string(),
            &format!("row {} updated", committed.index + 1),
        );

        let sync = self.sync();
        Ok(CommitReport { committed, sync })
    }

    /// Push the local file to the remote replica and record the outcome.
    pub fn sync(&mut self) -> Result<Receipt, SyncError> {
        let result = self.store.sync();
        match &result {
            Ok(r) => self.audit("sync", &r.object_id, &format!("{} bytes uploaded", r.bytes)),
            Err(e) => self.audit("sync_failed", &e.object_id, &e.cause),
        }
        result
    }

    /// Audit is best-effort: a failing write is only reported.
    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Some(pool) = &self.audit
            && let Err(e) = jhlog(&pool.conn, operation, target, message)
        {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
}
