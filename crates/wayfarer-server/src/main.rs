use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use wayfarer_server::{AppState, router};

mod bootstrap;
mod cli;
mod config_warnings;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("wayfarer error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let config = bootstrap::load_config(&args)?;
    config_warnings::warn_unconfigured(&config);

    let bind_addr = config.server.bind_addr();
    let environment = config.general.environment.clone();
    let frontend_url = config.server.frontend_url.clone();
    let state = AppState::new(config).context("failed to build upstream HTTP clients")?;

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        addr = %bind_addr,
        environment = %environment,
        frontend = %frontend_url,
        "wayfarer listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("wayfarer stopped");
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WAYFARER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
