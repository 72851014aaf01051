use crate::cli::commands::session_key;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::gate::{Access, Gate};
use crate::db::log::jhlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::DatasetStore;
use crate::ui::messages::{info, success, warning};

/// Push the local copy to the remote, e.g. after a failed upload.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let key = session_key(cli)?;
    if !Gate::from_config(cfg).authorize(Access::Secret, &key) {
        return Err(AppError::CredentialRejected);
    }

    let store = DatasetStore::from_config(cfg);
    if !store.local_path().exists() {
        return Err(AppError::SourceUnavailable(format!(
            "no local copy at {}",
            store.local_path().display()
        )));
    }
    if !store.has_pending_sync() {
        info("No pending edits recorded; uploading the local copy anyway.");
    }

    let result = store.sync();

    let audit = match &result {
        Ok(r) => ("sync", r.object_id.clone(), format!("{} bytes uploaded", r.bytes)),
        Err(e) => ("sync_failed", e.object_id.clone(), e.cause.clone()),
    };
    match DbPool::new(&cfg.audit_database) {
        Ok(pool) => {
            if let Err(e) = jhlog(&pool.conn, audit.0, &audit.1, &audit.2) {
                warning(format!("Failed to write internal log: {e}"));
            }
        }
        Err(e) => warning(format!("Audit log unavailable: {e}")),
    }

    let receipt = result?;
    success(format!(
        "File updated successfully! {} bytes uploaded to '{}' at {}.",
        receipt.bytes,
        receipt.object_id,
        receipt.finished_at.format("%F %T")
    ));
    Ok(())
}
