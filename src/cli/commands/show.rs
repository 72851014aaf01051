use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::ui::view::{print_advisories, print_record};

/// Locked view of one record. Outreach advisories are shown to the secret
/// holder only.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { target } = &cli.command {
        let mut session = open_session(cli, cfg)?;
        let (selector, value) = target.selector();
        let selection = session.select(selector, value)?;

        if selection.matched > 1 {
            warning(format!(
                "{} records match {} '{}'; showing the first one.",
                selection.matched,
                selector.column(),
                value
            ));
        }

        if let Some(wf) = session.current() {
            print_record(wf.record());
            if session.is_privileged() {
                print_advisories(wf.record());
            } else {
                info("Outreach status is visible with the secret key.");
            }
        }
    }
    Ok(())
}
