//! Overwrite guard shared by backup and export.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Allow writing `path` when it does not exist, when `force` is set, or when
/// the user confirms on stdin.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    let stdin = io::stdin();
    confirm_overwrite(path, force, &mut stdin.lock())
}

/// Same as `ensure_writable`, reading the answer from `answers`.
pub fn confirm_overwrite<R: BufRead>(path: &Path, force: bool, answers: &mut R) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "cancelled: '{}' not overwritten",
            path.display()
        ))),
    }
}
