//! `srd` server binary.
//!
//! # Usage
//!
//! ```bash
//! # Defaults from the environment (and `.env` if present)
//! srd
//!
//! # Override listeners and logging
//! srd --listen 0.0.0.0:80 --ask-listen 127.0.0.1:8081 --log-format json --debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use srd::config::Config;
use srd::server;
use tracing_subscriber::EnvFilter;

/// HTTP redirector driven by DNS TXT records.
#[derive(Parser)]
#[command(name = "srd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Redirect listener address (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,

    /// Ask endpoint listener address (overrides ASK_LISTEN)
    #[arg(long)]
    ask_listen: Option<String>,

    /// Enable debug logging (overrides DEBUG)
    #[arg(long)]
    debug: bool,

    /// Log format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(ask_listen) = self.ask_listen {
            config.ask_listen_addr = Some(ask_listen);
        }
        if self.debug {
            config.debug = true;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(config.log_filter())
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter()))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
