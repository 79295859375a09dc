use crate::config::toml_config::TomlConfig;
use crate::config::SourceSettings;
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "picker")]
#[command(about = "Delivery-date check and pallet listing for the picking desk")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Shipment-listing endpoint (overrides the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the date and a ticking clock
    Clock {
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Validate a requested delivery date
    Check {
        /// Requested delivery date (YYYY-MM-DD)
        date: Option<String>,

        /// Pretend today is this date
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Validate the date, then fetch and list the pallets
    Submit {
        /// Requested delivery date (YYYY-MM-DD)
        date: Option<String>,

        /// Pretend today is this date
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

impl CliConfig {
    /// File values first, then command line flags on top.
    pub fn source_settings(&self) -> Result<SourceSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => SourceSettings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }

        Ok(settings)
    }
}
