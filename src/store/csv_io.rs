//! Dataset file format: header row plus one row per record.

use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Field, Record};
use crate::utils::path::sibling_with_suffix;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Parse a dataset from CSV text. Columns are matched by header name.
pub fn parse_dataset<R: Read>(reader: R) -> AppResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::Parse(format!("cannot read header row: {e}")))?
        .clone();

    let missing: Vec<&str> = Field::ALL
        .iter()
        .map(|f| f.column())
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Parse(format!(
            "missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<Record>().enumerate() {
        let rec = row.map_err(|e| AppError::Parse(format!("row {}: {e}", i + 1)))?;
        records.push(rec);
    }

    Ok(Dataset::new(records))
}

pub fn read_dataset(path: &Path) -> AppResult<Dataset> {
    let file = fs::File::open(path).map_err(|e| {
        AppError::SourceUnavailable(format!("cannot open {}: {e}", path.display()))
    })?;
    parse_dataset(file)
}

/// Serialize the whole dataset, header included even when empty.
pub fn to_bytes(dataset: &Dataset) -> AppResult<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(Field::ALL.iter().map(|f| f.column()))?;
    for rec in dataset.records() {
        wtr.serialize(rec)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Other(format!("CSV flush error: {e}")))
}

/// Replace `path` with `bytes`: write a sibling temp file, fsync, rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = sibling_with_suffix(path, "tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

pub fn write_dataset(path: &Path, dataset: &Dataset) -> AppResult<()> {
    let bytes = to_bytes(dataset)?;
    write_atomic(path, &bytes)
}
