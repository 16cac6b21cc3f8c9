mod app;
mod bootstrap;
mod cli;
mod config;
mod export;
mod logging;
mod runtime;
mod ui;
mod view_model;

use crate::app::App;
use crate::cli::{Cli, Commands};
use crate::config::HoursConfig;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hours_client::{time_utils::today, ApiClient};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::ConfigPath => {
            let path = HoursConfig::ensure_exists()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run => {
            let config = HoursConfig::load()?;
            logging::init(&HoursConfig::log_path()?)?;
            let client = bootstrap::connect(&config).await?;
            run(&config, client).await
        }
        Commands::Dev => {
            let config = HoursConfig::load()?;
            logging::init(&HoursConfig::log_path()?)?;
            tracing::info!("Starting in dev mode with in-memory entries");
            let client = ApiClient::dev().context("Failed to create dev client")?;
            run(&config, client).await
        }
        Commands::Export { output, dev } => {
            let config = HoursConfig::load()?;
            logging::init(&HoursConfig::log_path()?)?;
            let client = if dev {
                ApiClient::dev().context("Failed to create dev client")?
            } else {
                bootstrap::connect(&config).await?
            };
            let entries = client.list().await.context("Failed to load entries")?;
            let path = output.unwrap_or_else(|| export::default_file_name(&today()));
            export::export_to_path(&path, &entries)?;
            println!("Exported {} entries to {}", entries.len(), path.display());
            Ok(())
        }
    }
}

async fn run(config: &HoursConfig, client: ApiClient) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = runtime::run_app(&mut terminal, &mut app, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:#}", e);
    }
    result
}
