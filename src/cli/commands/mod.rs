pub mod backup;
pub mod companies;
pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod prompt;
pub mod shell;
pub mod show;
pub mod stats;
pub mod sync;

use crate::cli::parser::{Cli, StatusArgs};
use crate::config::Config;
use crate::core::gate::Credential;
use crate::core::session::{CommitReport, Session};
use crate::core::views::StatusFilter;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Key given with `--key`; commands that open a session need one.
pub(crate) fn session_key(cli: &Cli) -> AppResult<Credential> {
    match &cli.key {
        Some(k) => k.parse(),
        None => Err(AppError::Config(
            "this command needs a session key: pass --key <KEY>".into(),
        )),
    }
}

pub(crate) fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let key = session_key(cli)?;
    Session::open(cfg, key, cli.offline)
}

/// Status view and prompts are reserved to the secret holder.
pub(crate) fn require_privileged(session: &Session, what: &str) -> AppResult<()> {
    if session.is_privileged() {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "{what} requires the secret key. Contact Admin for Secret Key"
        )))
    }
}

impl From<&StatusArgs> for StatusFilter {
    fn from(a: &StatusArgs) -> Self {
        StatusFilter {
            status: a.status,
            applied: a.applied,
            linkedin: a.linkedin,
            twitter: a.twitter,
            facebook: a.facebook,
            search: a.search.clone(),
        }
    }
}

/// Print what a commit did; a sync failure is only a warning.
pub(crate) fn report_commit(report: &CommitReport) {
    success(format!(
        "Form submitted: {} updated (row {}).",
        report.committed.key,
        report.committed.index + 1
    ));
    match &report.sync {
        Ok(receipt) => success(format!(
            "Data saved: {} bytes uploaded to '{}'.",
            receipt.bytes, receipt.object_id
        )),
        Err(e) => {
            warning(format!("An error occurred while uploading: {e}"));
            warning("Data is saved locally only; run `jobhunter sync` to retry.");
        }
    }
}
