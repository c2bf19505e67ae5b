use serde::{Deserialize, Serialize};

/// `.intercoder-reliability.yaml` schema.
/// Global (~/) and local files are deep-merged; unspecified fields keep defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory holding the tagging CSV files
    pub data_dir: String,
    /// Markdown report destination
    pub output: String,
    /// Level-1 heading of the report
    pub title: String,
    /// Category definitions listed under "Definitions"
    pub definitions: Vec<Definition>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: "data/tagging".into(),
            output: "docs/intercoder_reliability.md".into(),
            title: "Results from corpus tagging".into(),
            definitions: default_definitions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Definition {
    pub name: String,
    pub description: String,
}

impl Definition {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

fn default_definitions() -> Vec<Definition> {
    vec![
        Definition::new("wrong_language", "Not Danish"),
        Definition::new("skipped", "Unsure of category"),
        Definition::new(
            "correct_language",
            "Danish text where at least 80\\% of the text is reasonable sentences.",
        ),
        Definition::new(
            "not_language",
            "Text where less than 80\\% of the text is reasonable sentences. Takes priority over wrong_language.",
        ),
    ]
}
