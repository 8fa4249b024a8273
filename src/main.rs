//! Siteharvest command-line entry point

use anyhow::Context;
use clap::Parser;
use siteharvest::config::{load_config, validate, Config};
use siteharvest::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Siteharvest: a single-site breadth-first crawler
///
/// Crawls every reachable page of one website starting from a seed URL,
/// extracting text, links, and structured data (headings, forms, tables,
/// emails) from each page. Script-heavy pages are rendered in a headless
/// browser before extraction.
#[derive(Parser, Debug)]
#[command(name = "siteharvest")]
#[command(version)]
#[command(about = "Crawl a single website and extract its content", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "URL")]
    seed: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages to crawl
    #[arg(long)]
    max_pages: Option<usize>,

    /// Honor the site's robots.txt
    #[arg(long)]
    respect_robots: bool,

    /// Minimum politeness delay between pages, in seconds
    #[arg(long)]
    delay_min: Option<f64>,

    /// Maximum politeness delay between pages, in seconds
    #[arg(long)]
    delay_max: Option<f64>,

    /// Write results as JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    tracing::info!("Starting crawl of {}", cli.seed);
    let pages = crawl(&cli.seed, &config)
        .await
        .context("crawl failed")?;

    let json = serde_json::to_string_pretty(&pages).context("failed to serialize results")?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {} pages to {}", pages.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Loads the configuration file (if given) and applies CLI overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if cli.respect_robots {
        config.crawler.respect_robots = true;
    }
    if let Some(delay_min) = cli.delay_min {
        config.crawler.delay_min_seconds = delay_min;
    }
    if let Some(delay_max) = cli.delay_max {
        config.crawler.delay_max_seconds = delay_max;
    }

    // Overrides can invalidate a config that loaded cleanly.
    validate(&config).context("invalid configuration")?;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("siteharvest=info,warn"),
            1 => EnvFilter::new("siteharvest=debug,info"),
            2 => EnvFilter::new("siteharvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
