use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use crate::types::SessionMeta;

const MANIFEST_SUFFIX: &str = ".meta.yaml";

/// Sidecar descriptor `X.meta.yaml` next to `X.csv`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionManifest {
    #[serde(deserialize_with = "scalar_string")]
    tagger: String,
    #[serde(deserialize_with = "scalar_string")]
    session: String,
    #[serde(deserialize_with = "scalar_string")]
    docs: String,
    #[serde(deserialize_with = "scalar_string")]
    date: String,
}

/// `session: 3` and `session: "3"` both read as "3".
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {:?}",
            other
        ))),
    }
}

impl From<SessionManifest> for SessionMeta {
    fn from(m: SessionManifest) -> Self {
        SessionMeta {
            tagger_name: m.tagger,
            session_number: m.session,
            document_count: m.docs,
            tagging_date: m.date,
        }
    }
}

/// Sidecar path for a session CSV: `dir/X.csv` → `dir/X.meta.yaml`
pub fn manifest_path(csv_path: &Path) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    csv_path.with_file_name(format!("{}{}", stem, MANIFEST_SUFFIX))
}

/// Load the sidecar descriptor if one exists. `Ok(None)` when absent.
pub fn load_manifest(csv_path: &Path) -> Result<Option<SessionMeta>> {
    let path = manifest_path(csv_path);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read session manifest: {}", path.display()))?;
    let manifest: SessionManifest = serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid session manifest: {}", path.display()))?;

    Ok(Some(manifest.into()))
}
