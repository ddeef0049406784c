mod input;
mod render;
mod runtime;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use jokes_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_ASK_AMOUNT, DEFAULT_SEARCH_AMOUNT};
use jokes_core::tracing_setup::init_tracing;
use jokes_core::{CoreConfig, JokeClient, Session};

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser)]
#[command(name = "jokes-tui")]
#[command(about = "Ask for, search and look up jokes from a joke service")]
struct Cli {
    /// Base address of the joke service
    #[arg(long, env = "JOKES_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Jokes requested per ask
    #[arg(long, default_value_t = DEFAULT_ASK_AMOUNT)]
    ask_amount: u32,

    /// Search page size
    #[arg(long, default_value_t = DEFAULT_SEARCH_AMOUNT)]
    search_amount: u32,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = init_tracing()? {
        eprintln!("File logging enabled: {}", path);
    }

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let config = CoreConfig::new(cli.api_url)
        .with_amounts(cli.ask_amount, cli.search_amount)
        .with_timeout(cli.timeout_secs.map(Duration::from_secs));
    let client = JokeClient::new(&config)?;
    tracing::info!(base_url = client.base_url(), "starting jokes-tui");

    let mut app = App::new(Session::new(&config), client.base_url());
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app, client).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
