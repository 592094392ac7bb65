use anyhow::Result;
use tracing::{info, warn};

use forum_server::{config, logging, AppContext};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    logging::init_logging(&config.logging)?;

    info!("Starting forum backend v{}", env!("CARGO_PKG_VERSION"));

    // Storage is a hard prerequisite: any error here ends the process.
    let context = AppContext::initialize(&config).await?;
    let report = context.adapter().startup_report();
    info!(
        driver = context.adapter().driver().name,
        database = %context.adapter().config().name,
        tables_created = report.tables_created.len(),
        columns_added = report.columns_added.len(),
        "Storage ready"
    );

    shutdown_signal().await;

    context.shutdown().await?;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
