//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── transport: ReqwestConfig   # Endpoint, timeout, user agent
//! ├── client: ClientConfig       # List page size policy
//! └── command: Command           # The operation to run
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.

use std::process;

use anyhow::Context;
use bcedoc_client::ClientConfig;
use bcedoc_reqwest::ReqwestConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TRACING_TARGET_CONFIG;
use crate::command::Command;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "bcedoc")]
#[command(about = "Command line client for the DOC document service")]
#[command(version)]
pub struct Cli {
    /// HTTP transport configuration.
    #[clap(flatten)]
    pub transport: ReqwestConfig,

    /// Client-side validation policy.
    #[clap(flatten)]
    pub client: ClientConfig,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded first so its values act as defaults for
    /// clap's `env` lookups.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Logs go to stderr; stdout is reserved for command output.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.transport
            .validate()
            .context("invalid transport configuration")?;
        self.client
            .validate()
            .context("invalid client configuration")?;
        Ok(())
    }

    /// Logs configuration at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            endpoint = %self.transport.endpoint,
            timeout_secs = self.transport.effective_timeout().as_secs(),
            user_agent = %self.transport.effective_user_agent(),
            list_max_size = self.client.list_max_size,
            "Client configuration"
        );
    }

    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
