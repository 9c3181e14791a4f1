use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use marquee_server::{
    AppState, create_app,
    infra::{
        config::{Config, ConfigLoad, ConfigLoader},
        telemetry::init_tracing,
    },
};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marquee-server")]
#[command(about = "Movie catalogue with HTML pages and a JSON search API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load configuration and catalogue data, report counts and exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ConfigLoad { config, warnings } = load_runtime_config(&cli.serve)?;

    init_tracing();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    match &config.metadata.config_path {
        Some(path) => {
            info!(path = %path.display(), "configuration file loaded")
        }
        None => info!("running without a configuration file"),
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => warn!(
                message = %warning.message,
                hint = %hint,
                "configuration warning"
            ),
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let config = Arc::new(config);
    let state = AppState::load(Arc::clone(&config)).with_context(|| {
        format!(
            "failed to load catalogue data from {}",
            config.data.movies_path.display()
        )
    })?;
    info!(
        movies = state.catalog().len(),
        genres = state.catalog().genres().len(),
        reviews = state.reviews().len(),
        "catalogue ready"
    );

    if let Some(Command::Check) = cli.command {
        info!("configuration and data check passed");
        return Ok(());
    }

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        "Starting Marquee server on {}:{}",
        config.server.host, config.server.port
    );

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &args.env_file {
        loader = loader.with_env_file(path);
    }

    let mut load = loader.load().context("failed to load configuration")?;
    apply_cli_overrides(&mut load.config, args);
    Ok(load)
}

fn apply_cli_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
