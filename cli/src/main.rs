mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use typeahead_core::sources::{PoolFormat, RemoteSource};
use typeahead_core::types::{AppConfig, Item, MatchMode};
use typeahead_search::{LocalPool, RemoteLookup};

#[derive(Parser)]
#[command(name = "typeahead")]
#[command(version)]
#[command(about = "Search-as-you-type over a local pool or a public API", long_about = None)]
struct Cli {
    /// Config file (default: ./typeahead.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debounce window in milliseconds, overrides config
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    /// Maximum suggestions kept per lookup, overrides config
    #[arg(long, global = true)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a local JSON pool file
    Pool {
        /// JSON file holding an array of records
        file: PathBuf,

        /// Record format (items, quotes, elements)
        #[arg(short, long, default_value = "items")]
        format: PoolFormat,

        /// Fuzzy matching instead of substring
        #[arg(long)]
        fuzzy: bool,
    },

    /// Search a public API (omdb, universities, books, gbif, poetry)
    Remote {
        source: RemoteSource,

        /// OMDb API key, overrides config
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typeahead=info,typeahead_search=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut suggest = config.suggest_config();

    match cli.command {
        Commands::Pool {
            file,
            format,
            fuzzy,
        } => {
            if fuzzy {
                suggest.match_mode = MatchMode::Fuzzy;
            }
            let items = load_pool(&file, format)?;
            info!(items = items.len(), file = %file.display(), %format, "pool loaded");
            repl::run(LocalPool::from_config(items, &suggest), suggest).await
        }
        Commands::Remote { source, api_key } => {
            let mut lookup = RemoteLookup::from_config(source, &config)?;
            if let Some(key) = api_key {
                lookup = lookup.with_api_key(key);
            }
            info!(%source, url = source.base_url(&config.sources), "remote source ready");
            repl::run(lookup, suggest).await
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Loads the config file, applies flag overrides and repairs invalid values.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| AppConfig::path(Path::new(".")));
    let mut config = AppConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    if let Some(debounce_ms) = cli.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }
    if let Some(limit) = cli.limit {
        config.search.result_limit = limit;
    }

    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        warn!("{error}; falling back to default");
    }
    Ok(config.with_defaults_for_invalid())
}

fn load_pool(path: &Path, format: PoolFormat) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let body: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(format.normalize(&body)?)
}
