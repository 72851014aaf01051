use crate::cli::commands::{open_session, require_privileged};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::prompt::company_overview;
use crate::core::views::companies;
use crate::errors::{AppError, AppResult};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Prompt { company } = &cli.command {
        let session = open_session(cli, cfg)?;
        require_privileged(&session, "Company prompts")?;

        let found = companies(session.dataset()?)
            .into_iter()
            .find(|c| c.name == *company)
            .ok_or_else(|| AppError::NotFound {
                field: "company_name".into(),
                value: company.clone(),
            })?;

        print!("{}", company_overview(&found));
    }
    Ok(())
}
