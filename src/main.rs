use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use salaah::api::HttpTransport;
use salaah::cli::args::{Cli, Commands};
use salaah::cli::handlers;
use salaah::{AppConfig, ScheduleStore};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    debug!("Using content store at {}", config.api.base_url);

    if let Some(Commands::Config { init }) = cli.command {
        return handlers::handle_config(&config, init);
    }

    let transport = HttpTransport::new(&config.api).context("Building HTTP client")?;
    let store = ScheduleStore::new(transport, config.api.clone(), config.display.friday_policy);
    let now = chrono::Local::now().naive_local();

    match cli.command {
        // No subcommand → today's timetable
        None | Some(Commands::Today) => handlers::handle_today(&store, now, cli.json).await?,
        Some(Commands::Tomorrow) => handlers::handle_tomorrow(&store, now, cli.json).await?,
        Some(Commands::Week) => handlers::handle_week(&store, now, cli.json).await?,
        Some(Commands::Next) => handlers::handle_next(&store, now).await?,
        Some(Commands::Config { .. }) => unreachable!(),
    }

    Ok(())
}
