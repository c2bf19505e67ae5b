use serde::{Deserialize, Deserializer, Serialize};

/// Session metadata: who tagged, which round, how many documents, when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMeta {
    pub tagger_name: String,
    pub session_number: String,
    pub document_count: String,
    pub tagging_date: String,
}

/// One tagged text unit from a session CSV.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggingRow {
    pub text: String,
    pub category: String,
    #[serde(deserialize_with = "loose_bool")]
    pub is_porn: bool,
    #[serde(deserialize_with = "loose_bool")]
    pub is_offensive: bool,
}

impl TaggingRow {
    pub fn new(text: &str, category: &str) -> Self {
        Self {
            text: text.to_string(),
            category: category.to_string(),
            is_porn: false,
            is_offensive: false,
        }
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One tagger's one session: metadata plus all rows, keyed by filename stem.
#[derive(Debug, Clone)]
pub struct TaggingSession {
    pub key: String,
    pub meta: SessionMeta,
    pub rows: Vec<TaggingRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub chars: usize,
    pub percent: f64,
}

/// Character-weighted proportions for a single session.
/// Category, porn and offensive buckets overlap.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProportionSummary {
    pub total_chars: usize,
    pub categories: Vec<CategoryShare>,
    pub porn_percent: f64,
    pub offensive_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub key: String,
    pub meta: SessionMeta,
    pub sentences: usize,
    pub proportions: ProportionSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReliability {
    pub first: SessionMeta,
    pub second: SessionMeta,
    pub overlap: usize,
    /// NaN when both sides used one identical label only.
    pub kappa: f64,
}

/// Everything the renderer needs, in report order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityReport {
    pub sessions: Vec<SessionReport>,
    pub pairs: Vec<PairReliability>,
}

/// Accepts the spellings spreadsheet and pandas exports produce.
/// An empty cell is a missing value and never counts as flagged.
fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "True" | "true" | "TRUE" | "1" => Ok(true),
        "False" | "false" | "FALSE" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean '{}': expected True or False",
            other
        ))),
    }
}
