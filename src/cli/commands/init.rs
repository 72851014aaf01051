use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::jhlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::path::PathBuf;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (never overwritten)
///  - the audit database
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    let mut cfg = Config::init_all(&path)?;
    if let Some(data) = &cli.data {
        cfg.local_dataset = data.clone();
    }

    println!("⚙️  Initializing jobhunter…");
    println!("📄 Config file : {}", path.display());
    println!("📦 Local data  : {}", cfg.local_dataset);
    println!("🗄️  Audit log   : {}", cfg.audit_database);

    let pool = DbPool::new(&cfg.audit_database)?;

    // internal log, non bloccante
    if let Err(e) = jhlog(
        &pool.conn,
        "init",
        &path.to_string_lossy(),
        "Configuration initialized",
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 jobhunter initialization completed!");
    println!("   Set dataset_object_id, secret_key and access_keys in the config file to start.");
    Ok(())
}
