use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use intercoder_reliability::commands::report::{self, OutputFormat, ReportOptions};
use intercoder_reliability::config::{self, loader};

#[derive(Parser)]
#[command(name = "intercoder-reliability")]
#[command(version)]
#[command(about = "Summarize tagging sessions and compute Cohen's Kappa between taggers")]
struct Cli {
    /// Directory containing <tagger>_session_<n>_docs_<n>_<date>.csv files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Markdown report path (overwritten)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Config file to merge over the global one (defaults to ./.intercoder-reliability.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stdout format: markdown or json
    #[arg(long, default_value = "markdown")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intercoder_reliability=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let format: OutputFormat = cli.format.parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let local_config = match cli.config {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path
        }
        None => std::env::current_dir()
            .context("failed to get current directory")?
            .join(loader::CONFIG_FILENAME),
    };
    let cfg = loader::load_merged(&config::RealEnv, Some(local_config.as_path()));

    let options = ReportOptions {
        data_dir: cli.data_dir.unwrap_or_else(|| PathBuf::from(&cfg.data_dir)),
        output: cli.output.unwrap_or_else(|| PathBuf::from(&cfg.output)),
        title: cfg.title,
        definitions: cfg.definitions,
        format,
    };

    report::run(&options)
}
