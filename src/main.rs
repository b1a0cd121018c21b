use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod core;
mod rewrite;
mod rules;

#[derive(Parser)]
#[command(name = "migrate-urls")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Replace hardcoded API endpoint literals with API_URLS references",
    long_about = "One-shot source-text migration for the front-end: rewrites hardcoded \
                  endpoint string literals into references to the centralized API_URLS \
                  constants and inserts the matching import wherever a file changed."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Path to the front-end project root (defaults to current directory)
    #[arg(short = 'p', long)]
    project: Option<PathBuf>,

    /// Show what would change without writing any file
    #[arg(long)]
    preview: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("migrate_urls=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("migrate_urls=info")
            .init();
    }

    let project_root = cli.project.unwrap_or_else(|| PathBuf::from("."));

    commands::migrate::run(project_root, cli.preview, &cli.format)
}
