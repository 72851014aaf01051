//! Push of the local dataset file to the remote replica.
//!
//! One attempt per call, no retry. A failed push leaves a pending marker
//! next to the local file so the next session keeps the local copy.

use crate::store::remote::RemoteStore;
use crate::utils::path::sibling_with_suffix;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[error("could not upload to '{object_id}': {cause}")]
pub struct SyncError {
    pub object_id: String,
    pub cause: String,
}

/// Proof of a successful upload.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub object_id: String,
    pub bytes: usize,
    pub finished_at: DateTime<Local>,
}

pub struct SyncReconciler<'a> {
    remote: &'a dyn RemoteStore,
}

impl<'a> SyncReconciler<'a> {
    pub fn new(remote: &'a dyn RemoteStore) -> Self {
        Self { remote }
    }

    pub fn push(&self, local_file: &Path, object_id: &str) -> Result<Receipt, SyncError> {
        let fail = |cause: String| SyncError {
            object_id: object_id.to_string(),
            cause,
        };

        let result = (|| {
            if object_id.is_empty() {
                return Err(fail("no remote object id configured".into()));
            }
            let body = fs::read(local_file)
                .map_err(|e| fail(format!("cannot read {}: {e}", local_file.display())))?;
            let bytes = body.len();
            self.remote
                .upload(object_id, body)
                .map_err(|e| fail(e.to_string()))?;
            Ok(Receipt {
                object_id: object_id.to_string(),
                bytes,
                finished_at: Local::now(),
            })
        })();

        match &result {
            Ok(_) => clear_pending(local_file),
            Err(e) => mark_pending(local_file, &e.cause),
        }
        result
    }
}

pub fn pending_marker(local_file: &Path) -> PathBuf {
    sibling_with_suffix(local_file, "pending")
}

/// True when the local file holds edits the remote has not received.
pub fn is_pending(local_file: &Path) -> bool {
    pending_marker(local_file).exists()
}

fn mark_pending(local_file: &Path, cause: &str) {
    let line = format!("{} {}\n", Local::now().to_rfc3339(), cause);
    if let Err(e) = fs::write(pending_marker(local_file), line) {
        eprintln!("⚠️ Failed to write pending-sync marker: {}", e);
    }
}

pub(crate) fn clear_pending(local_file: &Path) {
    let marker = pending_marker(local_file);
    if marker.exists()
        && let Err(e) = fs::remove_file(&marker)
    {
        eprintln!("⚠️ Failed to remove pending-sync marker: {}", e);
    }
}
