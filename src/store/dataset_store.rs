use crate::config::Config;
use crate::core::locator::AmbiguityPolicy;
use crate::core::sync::{Receipt, SyncError, SyncReconciler, clear_pending, is_pending};
use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Record, RecordKey};
use crate::store::csv_io::{read_dataset, write_atomic, write_dataset};
use crate::store::remote::{self, RemoteStore};
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// Where the dataset of the current session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    /// Local copy kept because a previous sync failed.
    PendingLocal,
    Offline,
}

/// Owner of the canonical dataset: remote fetch, local durable copy,
/// in-memory table.
pub struct DatasetStore {
    remote: Box<dyn RemoteStore>,
    object_id: String,
    local_path: PathBuf,
    offline: bool,
    cache: Option<Dataset>,
    source: Option<LoadSource>,
}

impl DatasetStore {
    pub fn new(remote: Box<dyn RemoteStore>, object_id: &str, local_path: PathBuf) -> Self {
        Self {
            remote,
            object_id: object_id.to_string(),
            local_path,
            offline: false,
            cache: None,
            source: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            remote::from_config(cfg),
            &cfg.dataset_object_id,
            PathBuf::from(&cfg.local_dataset),
        )
    }

    /// Skip the remote fetch and use the local file as is.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn source(&self) -> Option<LoadSource> {
        self.source
    }

    /// Load the dataset once; later calls return the cached table.
    pub fn load(&mut self) -> AppResult<&Dataset> {
        if self.cache.is_none() {
            let (dataset, source) = self.read_through()?;
            self.cache = Some(dataset);
            self.source = Some(source);
        }
        self.dataset()
    }

    /// The loaded dataset.
    pub fn dataset(&self) -> AppResult<&Dataset> {
        self.cache
            .as_ref()
            .ok_or_else(|| AppError::Other("dataset not loaded".into()))
    }

    fn read_through(&self) -> AppResult<(Dataset, LoadSource)> {
        if self.offline {
            if !self.local_path.exists() {
                return Err(AppError::SourceUnavailable(format!(
                    "offline mode and no local copy at {}",
                    self.local_path.display()
                )));
            }
            return Ok((read_dataset(&self.local_path)?, LoadSource::Offline));
        }

        if is_pending(&self.local_path) && self.local_path.exists() {
            warning(format!(
                "Local copy {} has edits not yet synced; using it instead of the remote. Run `jobhunter sync`.",
                self.local_path.display()
            ));
            return Ok((read_dataset(&self.local_path)?, LoadSource::PendingLocal));
        }

        if self.object_id.is_empty() {
            return Err(AppError::SourceUnavailable(
                "no dataset_object_id configured".into(),
            ));
        }

        let bytes = self.remote.fetch(&self.object_id).map_err(|e| {
            AppError::SourceUnavailable(format!("{} ({}): {e}", self.object_id, self.remote.describe()))
        })?;
        write_atomic(&self.local_path, &bytes)?;
        // marker left without its local copy: the fresh fetch supersedes it
        clear_pending(&self.local_path);

        Ok((read_dataset(&self.local_path)?, LoadSource::Remote))
    }

    /// Replace the record identified by `key` with `new_values` and persist
    /// the whole table to the local file. Returns the row index touched.
    ///
    /// Row `at` is written when it still has `key`; otherwise the row is
    /// looked up by key.
    pub fn update(
        &mut self,
        at: usize,
        key: &RecordKey,
        new_values: Record,
        policy: AmbiguityPolicy,
    ) -> AppResult<usize> {
        let dataset = self
            .cache
            .as_ref()
            .ok_or_else(|| AppError::Other("dataset not loaded".into()))?;
        let index = dataset.resolve_row(at, key, policy)?;

        let mut next = dataset.clone();
        next.replace(index, new_values)?;
        write_dataset(&self.local_path, &next)?;

        self.cache = Some(next);
        Ok(index)
    }

    /// Upload the local file to the remote replica.
    pub fn sync(&self) -> Result<Receipt, SyncError> {
        SyncReconciler::new(self.remote.as_ref()).push(&self.local_path, &self.object_id)
    }

    pub fn has_pending_sync(&self) -> bool {
        is_pending(&self.local_path)
    }
}
