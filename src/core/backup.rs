use crate::config::Config;
use crate::db::log::jhlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::fs::ensure_writable;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the local dataset file to `dest_file`, optionally zipped.
    /// Returns the path actually written.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.local_dataset);
        let dest = Path::new(dest_file);

        // 1️⃣ Check the local copy exists
        if !src.exists() {
            return Err(AppError::SourceUnavailable(format!(
                "local dataset not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&final_path, force)?;

        // 3️⃣ Copy or compress
        if compress {
            compress_backup(src, &final_path)?;
        } else {
            fs::copy(src, &final_path)?;
        }
        success(format!("Backup created: {}", final_path.display()));

        // 4️⃣ Audit (non bloccante)
        match DbPool::new(&cfg.audit_database) {
            Ok(pool) => {
                let msg = if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                };
                if let Err(e) = jhlog(&pool.conn, "backup", &final_path.to_string_lossy(), msg) {
                    warning(format!("Failed to write internal log: {e}"));
                }
            }
            Err(e) => warning(format!("Audit log unavailable: {e}")),
        }

        Ok(final_path)
    }
}

/// Store `src` as the single entry of a new zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "job_data.csv".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
