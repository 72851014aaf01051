use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::views::companies;
use crate::errors::AppResult;
use crate::ui::messages::alert;
use crate::ui::view::print_companies;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg)?;
    let list = companies(session.dataset()?);
    if list.is_empty() {
        alert("No Data Found!");
    } else {
        print_companies(&list);
    }
    Ok(())
}
