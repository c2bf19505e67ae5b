use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::analyzers::{analyze_pairs, summarize_proportions};
use crate::config::models::Definition;
use crate::parsers::load_sessions;
use crate::report::render_report;
use crate::types::{ReliabilityReport, SessionReport, TaggingSession};

/// What goes to stdout. The Markdown file is written either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("invalid format '{}': expected markdown or json", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub title: String,
    pub definitions: Vec<Definition>,
    pub format: OutputFormat,
}

/// Summarize every session and compute reliability for every pair.
pub fn build_report(sessions: &[TaggingSession]) -> Result<ReliabilityReport> {
    let summaries = sessions
        .iter()
        .map(|session| -> Result<SessionReport> {
            let proportions = summarize_proportions(session)?;
            Ok(SessionReport {
                key: session.key.clone(),
                meta: session.meta.clone(),
                sentences: session.rows.len(),
                proportions,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let pairs = analyze_pairs(sessions)?;

    Ok(ReliabilityReport {
        sessions: summaries,
        pairs,
    })
}

/// Load, analyze, render; echo to stdout, then write the report file.
pub fn run(options: &ReportOptions) -> Result<()> {
    tracing::info!("reading tagging files from {}", options.data_dir.display());
    let sessions = load_sessions(&options.data_dir)?;
    tracing::info!("loaded {} sessions", sessions.len());

    let report = build_report(&sessions)?;
    tracing::info!("computed reliability for {} pairs", report.pairs.len());

    let text = render_report(&options.title, &options.definitions, &report);

    match options.format {
        OutputFormat::Markdown => println!("{}", text),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "generatedAt": chrono::Utc::now().to_rfc3339(),
                "dataDir": options.data_dir.display().to_string(),
                "output": options.output.display().to_string(),
                "sessions": report.sessions,
                "pairs": report.pairs,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    write_report(&options.output, &text)?;
    tracing::info!("report written to {}", options.output.display());

    Ok(())
}

/// Overwrite `path` with `text`, creating parent directories as needed.
fn write_report(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
    }
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
