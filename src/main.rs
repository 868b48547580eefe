use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;

mod app;
mod config;
mod forum;
mod ui;
mod utils;

use app::App;
use config::Config;
use forum::route::Route;
use forum::ActiveScreen;
use utils::error::ForumError;

#[derive(Parser)]
#[command(name = "forumpro")]
#[command(about = "A terminal-based forum browser with vim-like interface")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "forumpro.yaml")]
    config: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Route to open on startup, e.g. "/" or "/topic/1"
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Print the mounted screen state as JSON and exit
    #[arg(long)]
    dump: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if cli.debug {
        config.enable_debug();
    }

    // Initialize logging. The TUI owns the terminal, so events go to a file
    // when one is configured.
    let log_level = config.log_level()?;
    match &config.logging.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_max_level(log_level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(log_level)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    let route: Route = cli.route.parse()?;

    if cli.dump {
        let screen = ActiveScreen::mount(&route);
        println!("{}", serde_json::to_string_pretty(&screen).map_err(ForumError::from)?);
        return Ok(());
    }

    info!("Starting ForumPro at {}", route);

    let mut app = App::new(config, &route);
    app.run().await?;

    info!("ForumPro shutdown complete");
    Ok(())
}
