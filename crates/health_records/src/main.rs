mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::{
    io::Read,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use health_records_core::dispatch::RouteRequest;
use health_records_core::storage::RecordStore;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Health Records - CRUD service for health records
#[derive(Parser, Debug)]
#[command(name = "health_records")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST", global = true)]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT", global = true)]
    port: u16,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Dispatch one request descriptor and print the response descriptor
    Invoke {
        /// JSON file with `routeKey`, `pathParameters` and `body`, or `-` for stdin
        event: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `invoke` output stays clean on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "health_records=debug,health_records_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let store = init_store(&config).await;
    let state = AppState::new(store, config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(state, &cli.host, cli.port).await,
        Command::Invoke { event } => invoke(&state, &event).await,
    }
}

#[cfg(feature = "inmemory")]
async fn init_store(_config: &Config) -> Arc<dyn RecordStore> {
    tracing::info!("Using in-memory record store");
    Arc::new(storage::InMemoryRepository::new())
}

#[cfg(feature = "dynamodb")]
async fn init_store(config: &Config) -> Arc<dyn RecordStore> {
    let repo = storage::DynamoDbRepository::from_config(config).await;
    tracing::info!(
        table = repo.table_name(),
        endpoint = ?config.dynamodb_endpoint_url,
        "Using DynamoDB record store"
    );
    Arc::new(repo)
}

/// Run the HTTP server until a shutdown signal arrives.
async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{host}:{port}");
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Dispatch a single request descriptor read from a file or stdin.
async fn invoke(state: &AppState, event: &Path) -> Result<()> {
    let raw = if event == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read request descriptor from stdin")?;
        raw
    } else {
        std::fs::read_to_string(event)
            .with_context(|| format!("Failed to read request descriptor {}", event.display()))?
    };

    let request: RouteRequest =
        serde_json::from_str(&raw).context("Invalid request descriptor")?;
    let response = state.dispatcher.dispatch(&request).await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
