mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers::{self, ConfigUpdate};
use takvimi::config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    match cli.command {
        // No subcommand → today's times
        None => handlers::handle_times(&config, None, None)?,
        Some(Commands::Times { date, city }) => handlers::handle_times(&config, date, city)?,
        Some(Commands::Next { city }) => handlers::handle_next(&config, city)?,
        Some(Commands::Week { date, city }) => handlers::handle_week(&config, date, city)?,
        Some(Commands::Qibla { lat, lon }) => handlers::handle_qibla(&config, lat, lon)?,
        Some(Commands::Cities) => handlers::handle_cities()?,
        Some(Commands::Config {
            city,
            lat,
            lon,
            data_dir,
            year,
            twelve_hour,
        }) => handlers::handle_config(
            &mut config,
            ConfigUpdate {
                city,
                lat,
                lon,
                data_dir,
                year,
                twelve_hour,
            },
        )?,
    }

    Ok(())
}
