use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, RemoteConfig};
use crate::core::gate::Gate;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::{Path, PathBuf};
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Re-read the file after an edit and point out settings a session needs.
fn check_config(path: &Path) {
    let cfg = match Config::load_from(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error(format!("The edited configuration does not load: {e}"));
            return;
        }
    };

    if cfg.dataset_object_id.is_empty() {
        warning("dataset_object_id is empty: sessions cannot load the dataset.");
    }
    let gate = Gate::from_config(&cfg);
    if !gate.has_secret() {
        warning("secret_key is missing or not a 4-digit number: edits cannot be saved.");
    }
    match &cfg.remote {
        RemoteConfig::Http { .. } if cfg.credentials_object_id.is_empty() => {
            if !Path::new(&cfg.credentials_file).exists() {
                warning("No credentials_object_id and no credentials file: uploads will fail.");
            }
        }
        RemoteConfig::Dir { path, read_only } => {
            info(format!(
                "Remote store: directory {path}{}",
                if *read_only { " (read-only)" } else { "" }
            ));
        }
        _ => {}
    }
    info(format!("Ambiguous selections: {:?}", cfg.ambiguity));
}

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            let edited = if run_editor(&chosen, &path) {
                success(format!("Configuration file edited using '{chosen}'"));
                true
            } else if chosen != fallback {
                warning(format!(
                    "Editor '{chosen}' not available, falling back to '{fallback}'"
                ));
                let ok = run_editor(&fallback, &path);
                if ok {
                    success(format!("Configuration file edited using fallback '{fallback}'"));
                }
                ok
            } else {
                false
            };

            if edited {
                check_config(&path);
            } else {
                error(format!("Failed to edit configuration file {}", path.display()));
            }
        }
    }

    Ok(())
}
