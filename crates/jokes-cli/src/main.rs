mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jokes_core::constants::{
    ANY_CATEGORY, DEFAULT_API_BASE_URL, DEFAULT_ASK_AMOUNT, DEFAULT_SEARCH_AMOUNT,
};
use jokes_core::tracing_setup::init_stderr_tracing;
use jokes_core::{CoreConfig, JokeClient, PageResult};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "jokes-cli")]
#[command(about = "One-shot access to the joke service")]
struct Cli {
    /// Base address of the joke service
    #[arg(long, env = "JOKES_API_URL", default_value = DEFAULT_API_BASE_URL, global = true)]
    api_url: String,

    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, short, global = true)]
    pretty: bool,

    /// Give up on the request after this many seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Log requests to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for jokes in plain language
    Ask {
        /// Free-text request, e.g. "tell me a programming joke"
        request: String,
        /// Number of jokes to ask for
        #[arg(long, short = 'n', default_value_t = DEFAULT_ASK_AMOUNT)]
        amount: u32,
    },

    /// Search jokes by keyword
    Search {
        query: String,
        /// Category filter ("Any" for no filter)
        #[arg(long, short, default_value = ANY_CATEGORY)]
        category: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, short = 'n', default_value_t = DEFAULT_SEARCH_AMOUNT)]
        amount: u32,
    },

    /// Fetch a joke by numeric ID
    Get { id: u64 },

    /// List joke categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_stderr_tracing(if cli.verbose { "debug" } else { "warn" });

    let format = OutputFormat::from_flags(cli.json, cli.pretty);
    let config = CoreConfig::new(cli.api_url).with_timeout(cli.timeout_secs.map(Duration::from_secs));
    let client = JokeClient::new(&config)?;
    tracing::debug!(base_url = client.base_url(), "jokes-cli");

    let rendered = match cli.command {
        Commands::Ask { request, amount } => {
            let page = client.ask(&request, amount).await?;
            format.page(&page)?
        }
        Commands::Search {
            query,
            category,
            page,
            amount,
        } => {
            let page = client.search(&query, &category, page, amount).await?;
            format.page(&page)?
        }
        Commands::Get { id } => {
            let joke = client.get_by_id(id).await?;
            format.page(&PageResult::single(joke))?
        }
        Commands::Categories => {
            let categories = client.list_categories().await?;
            format.categories(&categories)?
        }
    };

    println!("{}", rendered);
    Ok(())
}
