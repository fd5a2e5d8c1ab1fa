use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::email;

/// folio - portfolio contact backend
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Contact form backend for the portfolio site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = folio::Config::load(cli.config.clone())?;

    init_tracing(&config.logging.level);

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            log_credential_state(&config.email);

            let dispatcher = email::from_config(&config.email)
                .map_err(|e| anyhow::anyhow!("dispatcher setup failed: {e}"))?;

            folio::server::serve(config, dispatcher).await
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Startup visibility into whether dispatch can work. Logs the key
/// prefix only, never the key.
fn log_credential_state(config: &folio::config::EmailConfig) {
    if config.mock {
        info!("email dispatch in mock mode: submissions will be logged and discarded");
    } else if email::credential_is_well_formed(&config.api_key) {
        let prefix: String = config.api_key.chars().take(5).collect();
        info!(key_prefix = %prefix, "provider API key loaded");
    } else {
        warn!("provider API key missing or malformed; submissions will fail until configured");
    }
}
