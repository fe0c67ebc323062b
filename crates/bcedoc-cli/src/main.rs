#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod command;
mod config;

use std::process;
use std::time::Instant;

use anyhow::Context;
use bcedoc_reqwest::ReqwestClient;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_CONFIG: &str = "bcedoc_cli::config";
pub const TRACING_TARGET_COMMAND: &str = "bcedoc_cli::command";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_COMMAND,
            error = %format!("{error:#}"),
            "command failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate()?;

    let transport =
        ReqwestClient::new(cli.transport.clone()).context("failed to create HTTP transport")?;
    let client = transport.into_document_client().with_config(cli.client.clone());

    let operation = cli.command.name();
    let started_at = Instant::now();

    let output = cli
        .command
        .execute(&client)
        .await
        .with_context(|| format!("{operation} failed"))?;

    tracing::info!(
        target: TRACING_TARGET_COMMAND,
        operation,
        elapsed_ms = started_at.elapsed().as_millis(),
        "command completed"
    );

    let rendered = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{rendered}");

    Ok(())
}
