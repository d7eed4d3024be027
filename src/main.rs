//! price-scout - Search eBay and Walmart for a product and export the results to CSV

use anyhow::Result;
use clap::{Parser, Subcommand};
use price_scout::commands::{prompt_search_term, SearchCommand};
use price_scout::config::{Config, OutputFormat};
use price_scout::sites::Site;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "price-scout",
    version,
    about = "Search eBay and Walmart for a product and export the results to CSV",
    long_about = "Fetches one search results page per marketplace, prints the first listings \
                  of each and saves them to <query>_products.csv. Run without a subcommand \
                  to be prompted for the search term."
)]
struct Cli {
    /// Site to search (repeatable, searched in the given order)
    #[arg(long = "site", global = true)]
    sites: Vec<Site>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "PRICE_SCOUT_PROXY")]
    proxy: Option<String>,

    /// Fixed delay before each request in milliseconds
    #[arg(long, global = true, env = "PRICE_SCOUT_DELAY")]
    delay: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Directory the CSV file is written to
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Console output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products
    #[command(alias = "s")]
    Search {
        /// Search query; prompted for when omitted
        query: Option<String>,

        /// Maximum number of results per site
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// List supported sites
    Sites,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if !cli.sites.is_empty() {
        config.sites = cli.sites;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let query = match cli.command {
        Some(Commands::Sites) => {
            println!("Supported sites:\n");
            println!("{:<10} {:<16} {}", "Site", "Domain", "Search URL");
            println!("{:-<10} {:-<16} {:-<40}", "", "", "");

            for site in Site::all() {
                println!(
                    "{:<10} {:<16} {}",
                    site.to_string(),
                    site.domain(),
                    site.profile().search_url(&site.base_url(), "<query>")
                );
            }
            return Ok(());
        }

        Some(Commands::Search { query, max }) => {
            if let Some(max) = max {
                config.max_results = max;
            }
            query
        }

        None => None,
    };

    let raw = match query {
        Some(query) => query,
        None => prompt_search_term(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let cmd = SearchCommand::new(config);
    cmd.execute(&raw, &mut std::io::stdout()).await?;

    Ok(())
}
