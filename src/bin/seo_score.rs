//! Command-line SEO analyzer.
//!
//! Fetches a URL (or reads a local HTML file), prints the score and
//! extracted fields, and optionally exports the report.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use seo_score::{analyze_bytes_with_options, analyze_url, export, Options, SeoReport};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
}

/// Analyze the on-page SEO of a web page.
#[derive(Debug, Parser)]
#[command(name = "seo-score", version, about)]
struct Cli {
    /// Page URL to fetch. With --file, used as the page URL for link resolution.
    url: Option<String>,

    /// Analyze a local HTML file instead of fetching.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Focus keyword or phrase to check placement and density for.
    #[arg(long, short = 'k')]
    keyword: Option<String>,

    /// Check every link on the page for 4xx/5xx responses.
    #[arg(long)]
    check_links: bool,

    /// Maximum number of links to check.
    #[arg(long, default_value_t = 50, value_name = "N")]
    max_links: usize,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    timeout: u64,

    /// User-Agent header to send.
    #[arg(long)]
    user_agent: Option<String>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the extracted fields as CSV.
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Write the full report as JSON.
    #[arg(long, value_name = "PATH")]
    export_json: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let defaults = Options::default();
        Options {
            url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| defaults.user_agent.clone()),
            focus_keyword: self.keyword.clone(),
            check_links: self.check_links,
            max_links_checked: self.max_links,
            ..defaults
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,seo_score=debug"
    } else {
        "warn,seo_score=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<SeoReport> {
    let options = cli.options();

    if let Some(path) = &cli.file {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        if cli.check_links {
            tracing::warn!("--check-links is ignored for local files");
        }
        return Ok(analyze_bytes_with_options(&bytes, &options));
    }

    let Some(url) = cli.url.as_deref() else {
        bail!("Enter a webpage URL or pass --file");
    };

    analyze_url(url, &options).context("Error fetching the URL")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = run(&cli)?;

    match cli.format {
        Format::Text => print!("{}", export::render_text(&report)),
        Format::Markdown => print!("{}", export::render_markdown(&report)),
        Format::Json => println!("{}", export::to_json(&report)?),
    }

    if let Some(path) = &cli.export_csv {
        export::export_csv(path, &report)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Wrote: {}", path.display());
    }

    if let Some(path) = &cli.export_json {
        export::export_json(path, &report)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Wrote: {}", path.display());
    }

    Ok(())
}
