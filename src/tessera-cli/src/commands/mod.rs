pub mod network;
pub mod server;
pub mod user;
pub mod wallet;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tessera_sdk::TesseraClient;

use crate::config::ClientConfig;

/// Tessera CLI — inspect wallets, networks, and server identity
#[derive(Parser)]
#[command(name = "tessera-cli", version, about)]
pub struct Cli {
    /// Tessera server base URL
    #[arg(long, env = "TESSERA_API_URL")]
    url: Option<String>,

    /// Bearer access token
    #[arg(long, env = "TESSERA_ACCESS_TOKEN")]
    token: Option<String>,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable quiet mode (warnings only)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wallet operations
    Wallet {
        #[command(subcommand)]
        action: wallet::WalletAction,
    },
    /// User account operations
    User {
        #[command(subcommand)]
        action: user::UserAction,
    },
    /// Network operations
    Network {
        #[command(subcommand)]
        action: network::NetworkAction,
    },
    /// Server instance operations
    Server {
        #[command(subcommand)]
        action: server::ServerAction,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_logging(self.verbose, self.quiet);

        let mut config = match &self.config {
            Some(path) => ClientConfig::load_from_path(path)?,
            None => ClientConfig::load()?,
        };
        if let Some(url) = self.url {
            config.api_url = url;
        }
        if let Some(token) = self.token {
            config.access_token = Some(token);
        }

        let client =
            TesseraClient::from_parts(&config.api_url, config.access_token, config.timeout)?;

        match self.command {
            Commands::Wallet { action } => action.run(&client).await,
            Commands::User { action } => action.run(&client).await,
            Commands::Network { action } => action.run(&client).await,
            Commands::Server { action } => action.run(&client).await,
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
