use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::views::{StatusFilter, status_counts, status_view, top_counts};
use crate::errors::AppResult;
use crate::ui::view::print_counts;

const TOP: usize = 10;

/// Aggregate counts over the whole dataset. Status counts need the secret key.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg)?;
    let dataset = session.dataset()?;

    if session.is_privileged() {
        let rows = status_view(dataset, &StatusFilter::default());
        let counts: Vec<(String, usize)> = status_counts(&rows)
            .into_iter()
            .map(|(st, n)| (st.badge().to_string(), n))
            .collect();
        print_counts("Summary of Status", &counts);
    }

    print_counts(
        "Top Companies by Count",
        &top_counts(dataset, |r| r.company_name.as_str(), TOP),
    );
    print_counts(
        "Top Companies by Location",
        &top_counts(dataset, |r| r.company_location.as_str(), TOP),
    );
    print_counts(
        "Top Companies by Niche",
        &top_counts(dataset, |r| r.company_niche.as_str(), TOP),
    );
    Ok(())
}
