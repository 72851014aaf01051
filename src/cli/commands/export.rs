use crate::cli::commands::{open_session, require_privileged};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::views::{StatusFilter, status_view};
use crate::db::log::jhlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = &cli.command
    {
        let session = open_session(cli, cfg)?;
        require_privileged(&session, "Export")?;

        let rows = status_view(session.dataset()?, &StatusFilter::from(filters));
        ExportLogic::export(&rows, *format, file, *force)?;

        match DbPool::new(&cfg.audit_database) {
            Ok(pool) => {
                if let Err(e) = jhlog(
                    &pool.conn,
                    "export",
                    file,
                    &format!("{} rows as {}", rows.len(), format.as_str()),
                ) {
                    warning(format!("Failed to write internal log: {e}"));
                }
            }
            Err(e) => warning(format!("Audit log unavailable: {e}")),
        }
    }
    Ok(())
}
