mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::Cli;
use docqa_client::auth::StaticSession;
use docqa_client::ApiClient;
use dotenvy::dotenv;
use secrecy::ExposeSecret;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Cli::parse();

    init_tracing();

    let configuration = config::get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let session = match &configuration.auth.token {
        Some(token) => StaticSession::signed_in(token.expose_secret().clone()),
        None => StaticSession::signed_out(),
    };
    let client = ApiClient::new(configuration.api.clone(), Arc::new(session));

    tracing::debug!(base_url = %client.base_url(), "configured backend");

    commands::handle(&client, args.command).await
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
