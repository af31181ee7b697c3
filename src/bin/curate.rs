use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use factsmith::{
    categories::Category,
    config::Config,
    pipeline::Curator,
    store::{FactSink, JsonlFactSink, PgFactSink},
    wikipedia::WikipediaClient,
};

const TEST_MODE_MAX_ARTICLES: usize = 2;

#[derive(Parser)]
#[command(name = "curate")]
#[command(about = "Curate short facts from Wikipedia articles")]
#[command(version)]
struct Cli {
    /// Categories to curate (defaults to all of them)
    #[arg(short, long, num_args = 1.., value_parser = Category::from_str)]
    categories: Vec<Category>,

    /// Maximum articles to process per category
    #[arg(short, long, default_value_t = 10)]
    max_articles: usize,

    /// Quick run with a couple of articles per category
    #[arg(long)]
    test: bool,

    /// JSON-lines output file, overrides FACTS_OUTPUT_PATH
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(output) = cli.output {
        config = config.with_output_path(output);
    }

    let sink: Arc<dyn FactSink> = match config.database_url() {
        Some(url) => Arc::new(
            PgFactSink::connect(url)
                .await
                .context("connecting to fact database")?,
        ),
        None => {
            let sink = JsonlFactSink::open(config.output_path())
                .await
                .with_context(|| format!("opening {}", config.output_path().display()))?;
            info!("Writing facts to {}", sink.path().display());
            Arc::new(sink)
        }
    };
    let source = Arc::new(WikipediaClient::new(config.wikipedia_api_url())?);

    let mut curator = Curator::new(source, sink, config.run_settings().clone());

    let shutdown = curator.shutdown_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current article");
            shutdown.cancel();
        }
    });

    let categories: Vec<&str> = if cli.categories.is_empty() {
        Category::ALL.iter().map(Category::name).collect()
    } else {
        cli.categories.iter().map(Category::name).collect()
    };
    let max_articles = if cli.test {
        info!("Test mode: {} articles per category", TEST_MODE_MAX_ARTICLES);
        TEST_MODE_MAX_ARTICLES
    } else {
        cli.max_articles
    };

    let saved = curator.run_all(&categories, max_articles).await;
    let stats = curator.stats();
    println!(
        "Curated {} facts ({} saved) across {} categories",
        stats.processed,
        saved,
        categories.len()
    );

    Ok(())
}
