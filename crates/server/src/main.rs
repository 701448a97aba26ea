use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use lotwise_report::ReportAssemblerBuilder;
use lotwise_server::api::{AppState, router};
use lotwise_server::config::LotwiseConfig;
use lotwise_server::store_factory::create_parcel_store;

#[derive(Parser, Debug)]
#[command(name = "lotwise-server", about = "HTTP server for Lotwise parcel reports")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "lotwise.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = LotwiseConfig::load(Path::new(&cli.config))?;

    let store = create_parcel_store(&config.store).await?;
    info!(backend = %config.store.backend, "parcel store ready");

    let assembler = Arc::new(
        ReportAssemblerBuilder::new()
            .store(store)
            .query_timeout(config.report.query_timeout())
            .build()?,
    );

    let state = AppState::new(Arc::clone(&assembler), config.report.cache_control());
    let app = router(state);

    // CLI overrides take precedence.
    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "lotwise-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_seconds);
    info!(
        timeout_secs = config.server.shutdown_timeout_seconds,
        "closing parcel store..."
    );
    if tokio::time::timeout(shutdown_timeout, assembler.shutdown())
        .await
        .is_err()
    {
        warn!(
            timeout_secs = config.server.shutdown_timeout_seconds,
            "shutdown timeout exceeded, parcel store not closed cleanly"
        );
    }

    info!("lotwise-server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
