use crate::cli::commands::{open_session, require_privileged};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::views::{StatusFilter, paginate, status_counts, status_view};
use crate::errors::AppResult;
use crate::ui::messages::alert;
use crate::ui::view::{print_counts, print_status_page};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filters,
        page,
        per_page,
    } = &cli.command
    {
        let session = open_session(cli, cfg)?;
        require_privileged(&session, "My Status")?;

        let filter = StatusFilter::from(filters);
        let rows = status_view(session.dataset()?, &filter);

        if rows.is_empty() {
            alert("No Data Found!");
            return Ok(());
        }

        print_status_page(&paginate(&rows, *page, *per_page));

        let counts: Vec<(String, usize)> = status_counts(&rows)
            .into_iter()
            .map(|(st, n)| (st.badge().to_string(), n))
            .collect();
        print_counts("Summary of Status", &counts);
    }
    Ok(())
}
