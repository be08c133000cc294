mod api;
mod cli;
mod config;
mod engagement;
mod errors;
mod models;
mod pipeline;
mod state;
mod store;
mod upload;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::config::Config;
use crate::state::AppState;
use crate::store::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Arc::new(FileStore::open(config.data_file.clone())?);
    let api = ApiClient::new(config.api_url.clone());
    info!(api_url = %config.api_url, "client initialized");

    let state = AppState { api, store, config };

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli, state).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    Ok(())
}
