use crate::cli::commands::{open_session, report_commit};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::gate::Credential;
use crate::core::locator::{Selector, distinct_values};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::Field;
use crate::ui::messages::{error, info, success, warning};
use crate::ui::view::{print_advisories, print_record, print_staged};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  list hr | list company         distinct names to pick from
  select hr <name>               select the first record of an HR
  select company <name>          select the first record of a company
  show                           show the selected record
  edit                           unlock the selected record for editing
  set <field> <value>            stage a new value (e.g. set status In Talks)
  save <key>                     save staged values with the secret key
  cancel                         drop staged values and lock the record
  sync                           upload the local copy to the remote store
  fields                         list editable field names
  help                           this text
  quit                           leave the session";

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cli, cfg)?;
    info(format!(
        "Session opened: {} records. Type `help` for commands.",
        session.dataset()?.len()
    ));
    let stdin = io::stdin();
    run(&mut session, stdin.lock())
}

fn parse_selector(s: &str) -> AppResult<Selector> {
    match s.to_ascii_lowercase().as_str() {
        "hr" => Ok(Selector::Hr),
        "company" | "companies" => Ok(Selector::Company),
        other => Err(AppError::InvalidValue {
            field: "selector".into(),
            value: other.to_string(),
        }),
    }
}

/// Read commands until `quit` or end of input.
pub fn run<R: BufRead>(session: &mut Session, input: R) -> AppResult<()> {
    let mut lines = input.lines();
    loop {
        print!("jobhunter> ");
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        if matches!(cmd, "quit" | "exit") {
            break;
        }

        if let Err(e) = execute(session, cmd, rest) {
            if !e.is_recoverable() {
                return Err(e);
            }
            error(e);
        }
    }
    info("Session closed.");
    Ok(())
}

fn execute(session: &mut Session, cmd: &str, rest: &str) -> AppResult<()> {
    match cmd {
        "help" => println!("{HELP}"),

        "fields" => {
            for f in Field::ALL {
                println!("  {:<28} {}", f.column(), f.label());
            }
        }

        "list" => {
            let selector = parse_selector(rest)?;
            for v in distinct_values(session.dataset()?, selector) {
                println!("  {v}");
            }
        }

        "select" => {
            let (axis, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let selector = parse_selector(axis)?;
            let name = name.trim();
            let selection = session.select(selector, name)?;
            if selection.matched > 1 {
                warning(format!(
                    "{} records match '{}'; acting on the first one.",
                    selection.matched, name
                ));
            }
            show(session)?;
        }

        "show" => show(session)?,

        "edit" => {
            session.begin_edit()?;
            show(session)?;
        }

        "set" => {
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            session.stage(Field::from_name(name)?, value.trim())?;
        }

        "save" => {
            let key: Credential = rest.parse()?;
            let report = session.commit(&key)?;
            report_commit(&report);
        }

        "cancel" => {
            if session.cancel()? {
                info("Edit cancelled; record locked.");
            } else {
                info("Nothing to cancel.");
            }
        }

        "sync" => {
            let receipt = session.sync()?;
            success(format!(
                "File updated successfully! {} bytes uploaded.",
                receipt.bytes
            ));
        }

        other => {
            return Err(AppError::Other(format!(
                "unknown command '{other}' (type `help`)"
            )));
        }
    }
    Ok(())
}

fn show(session: &Session) -> AppResult<()> {
    let wf = session.current().ok_or(AppError::NoSelection)?;
    match wf.staged() {
        Some(staged) => print_staged(staged, wf.record()),
        None => {
            print_record(wf.record());
            if session.is_privileged() {
                print_advisories(wf.record());
            }
        }
    }
    Ok(())
}
