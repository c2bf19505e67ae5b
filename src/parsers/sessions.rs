use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::parsers::{filename::parse_stem, manifest::load_manifest};
use crate::types::{TaggingRow, TaggingSession};

/// List all tagging CSV files in a directory, sorted by path.
pub fn list_sessions(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("Failed to read tagging directory: {}", data_dir.display()))?;

    let mut sessions = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("csv") {
            sessions.push(path);
        }
    }

    sessions.sort();
    Ok(sessions)
}

/// Parse the rows of a single tagging CSV.
/// Columns are matched by header name; extra columns are ignored.
pub fn parse_rows(csv_path: &Path) -> Result<Vec<TaggingRow>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open tagging file: {}", csv_path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<TaggingRow>() {
        let row = record
            .with_context(|| format!("Malformed tagging file: {}", csv_path.display()))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Load one session: sidecar manifest if present, otherwise the filename schema.
pub fn load_session(csv_path: &Path) -> Result<TaggingSession> {
    let key = csv_path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Non UTF-8 file name: {}", csv_path.display()))?
        .to_string();

    let meta = match load_manifest(csv_path)? {
        Some(meta) => {
            tracing::debug!("using manifest metadata for {key}");
            meta
        }
        None => parse_stem(&key)
            .with_context(|| format!("No manifest for {}", csv_path.display()))?,
    };

    let rows = parse_rows(csv_path)?;
    tracing::debug!("loaded {} rows from {}", rows.len(), csv_path.display());

    Ok(TaggingSession { key, meta, rows })
}

/// Load every session in `data_dir`. An existing directory without CSV files yields no sessions.
pub fn load_sessions(data_dir: &Path) -> Result<Vec<TaggingSession>> {
    let files = list_sessions(data_dir)?;
    if files.is_empty() {
        tracing::warn!("no tagging files found in {}", data_dir.display());
    }

    files.iter().map(|path| load_session(path)).collect()
}
