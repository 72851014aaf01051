use crate::core::locator::Selector;
use crate::export::ExportFormat;
use crate::models::OutreachStatus;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for jobhunter
/// Personal CRM for HR contacts, companies and outreach status
#[derive(Parser)]
#[command(
    name = "jobhunter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track HR contacts, companies and outreach status in a CSV synced to a remote store",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the local dataset path
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Session key (4 digits)
    #[arg(global = true, long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// Use the local dataset copy without contacting the remote store
    #[arg(global = true, long = "offline")]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which record to act on.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct Target {
    /// Select by HR name
    #[arg(long, value_name = "NAME")]
    pub hr: Option<String>,

    /// Select by company name
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,
}

impl Target {
    pub fn selector(&self) -> (Selector, &str) {
        match (&self.hr, &self.company) {
            (Some(hr), _) => (Selector::Hr, hr.as_str()),
            (None, Some(company)) => (Selector::Company, company.as_str()),
            (None, None) => (Selector::Hr, ""),
        }
    }
}

/// Filters of the status listing.
#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {
    /// Only records with this status
    #[arg(long, value_enum)]
    pub status: Option<OutreachStatus>,

    /// Only records where you applied for a job
    #[arg(long)]
    pub applied: bool,

    /// Only records reached out to on LinkedIn
    #[arg(long)]
    pub linkedin: bool,

    /// Only records reached out to on Twitter
    #[arg(long)]
    pub twitter: bool,

    /// Only records reached out to on Facebook
    #[arg(long)]
    pub facebook: bool,

    /// Substring of the HR or company name
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the audit log
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show a contact/company record (read-only)
    Show {
        #[command(flatten)]
        target: Target,
    },

    /// Edit a record and save it with the secret key
    Edit {
        #[command(flatten)]
        target: Target,

        /// Field assignment, repeatable (e.g. --set status="In Talks" --set job_status=true)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        set: Vec<String>,

        /// Secret key authorizing the save
        #[arg(long, value_name = "KEY")]
        secret: String,
    },

    /// Interactive session: select, edit and save records
    Shell,

    /// Status of every contact, with filters and pagination
    List {
        #[command(flatten)]
        filters: StatusArgs,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items per page (1-20)
        #[arg(long = "per-page", default_value_t = 10)]
        per_page: usize,
    },

    /// Status counts and top companies by count, location and niche
    Stats,

    /// Directory of companies
    Companies,

    /// Print a company overview prompt for an LLM
    Prompt {
        /// Company name
        #[arg(long, value_name = "NAME")]
        company: String,
    },

    /// Upload the local dataset copy to the remote store
    Sync,

    /// Create a backup copy of the local dataset
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the status listing
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: StatusArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
