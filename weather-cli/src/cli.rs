use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use weather_core::{Config, DEFAULT_CITY, DEFAULT_COUNTRY, ForecastService, search_locations};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Current weather and short-term forecasts for Indian cities"
)]
pub struct Cli {
    /// Seed the random source so simulated output is reproducible.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the provider API key and base URL in the config file.
    Configure,

    /// Run the HTTP API.
    Serve {
        /// Address to bind; overrides the config file.
        #[arg(long)]
        host: Option<String>,

        /// Port to bind; overrides the config file.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show current weather for a city.
    Current {
        #[arg(default_value = DEFAULT_CITY)]
        city: String,

        /// Two-letter country code.
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },

    /// Show a synthesized multi-day forecast for a city.
    Forecast {
        #[arg(default_value = DEFAULT_CITY)]
        city: String,

        /// Two-letter country code.
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,

        /// Number of days, starting today; defaults to the configured value.
        #[arg(long, short)]
        days: Option<u32>,
    },

    /// List supported cities whose name contains QUERY.
    Search { query: Option<String> },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Serve { host, port } => {
                let mut config = load_config(self.seed)?;
                if let Some(host) = host {
                    config.server.host = host;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }

                let service = ForecastService::from_config(&config)?;
                weather_http::serve(config, service).await?;
            }
            Command::Current { city, country } => {
                let config = load_config(self.seed)?;
                let service = ForecastService::from_config(&config)?;
                let fetched = service.current_weather(&city, &country).await;
                output::print_current(&fetched);
            }
            Command::Forecast {
                city,
                country,
                days,
            } => {
                let config = load_config(self.seed)?;
                let days = days.unwrap_or(config.forecast.default_days);
                if days > config.forecast.max_days {
                    bail!(
                        "Requested {days} days; the maximum is {}",
                        config.forecast.max_days
                    );
                }

                let service = ForecastService::from_config(&config)?;
                let bundle = service.generate_forecast(&city, &country, days).await;
                output::print_forecast(&bundle);
            }
            Command::Search { query } => {
                let locations = search_locations(query.as_deref().unwrap_or_default());
                output::print_locations(&locations);
            }
        }

        Ok(())
    }
}

fn load_config(seed: Option<u64>) -> anyhow::Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;
    if seed.is_some() {
        config.forecast.seed = seed;
    }
    Ok(config)
}

/// Interactive configuration; environment overrides are not persisted.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(api_key.to_string());

    let base_url = Text::new("Provider base URL:")
        .with_default(&config.provider.base_url)
        .prompt()?;
    config.provider.base_url = base_url.trim().to_string();

    config.save()?;
    println!(
        "Configuration saved to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
