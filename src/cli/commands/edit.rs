use crate::cli::commands::{open_session, report_commit};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::gate::Credential;
use crate::errors::{AppError, AppResult};
use crate::models::{Field, Record};
use crate::ui::messages::warning;

/// Split `field=value`; the value may be empty and may contain `=`.
/// Status and flag values are checked here, before any load.
fn parse_assignment(raw: &str) -> AppResult<(Field, &str)> {
    let (name, value) = raw.split_once('=').ok_or_else(|| AppError::InvalidValue {
        field: "--set".into(),
        value: raw.to_string(),
    })?;
    let field = Field::from_name(name)?;
    Record::default().set(field, value)?;
    Ok((field, value))
}

/// One-shot edit: select, unlock, stage every `--set`, save with the secret.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        target,
        set,
        secret,
    } = &cli.command
    {
        // Validate input before touching anything
        let assignments = set
            .iter()
            .map(|raw| parse_assignment(raw))
            .collect::<AppResult<Vec<_>>>()?;
        let secret: Credential = secret.parse()?;

        let mut session = open_session(cli, cfg)?;
        let (selector, value) = target.selector();
        let selection = session.select(selector, value)?;

        if selection.matched > 1 {
            warning(format!(
                "{} records match {} '{}'; editing the first one only.",
                selection.matched,
                selector.column(),
                value
            ));
        }

        session.begin_edit()?;
        for (field, value) in assignments {
            session.stage(field, value)?;
        }

        let report = session.commit(&secret)?;
        report_commit(&report);
    }
    Ok(())
}
