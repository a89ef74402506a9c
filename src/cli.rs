use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::HostConfig;
use commands::serve;

#[derive(Parser)]
#[command(name = "finance-dashboard")]
#[command(about = "Serves the finance dashboard web client and its runtime settings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// Directory holding the compiled frontend bundle (index.html, wasm, js)
        #[arg(short, long, env = "STATIC_DIR", default_value = "workspace/frontend/dist")]
        static_dir: PathBuf,

        /// Base URL of the finance API the browser talks to
        #[arg(short, long, env = "API_BASE_URL", default_value = "http://localhost:8000")]
        api_base_url: String,

        /// Display locale: pt-BR, en-US or en-GB
        #[arg(short, long, env = "DASHBOARD_LOCALE", default_value = "pt-BR")]
        locale: String,

        /// ISO 4217 code used for amounts
        #[arg(short, long, env = "DASHBOARD_CURRENCY", default_value = "BRL")]
        currency: String,

        /// Days of balance history shown in the chart
        #[arg(long, env = "HISTORY_DAYS", default_value_t = 30)]
        history_days: u32,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                static_dir,
                api_base_url,
                locale,
                currency,
                history_days,
            } => {
                let config = HostConfig {
                    bind_address,
                    static_dir,
                    api_base_url,
                    locale,
                    currency,
                    history_days,
                };
                serve(config).await?;
            }
        }
        Ok(())
    }
}
