use clap::Parser;
use munsell_chart::utils::{logger, validation::Validate};
use munsell_chart::{create_router, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting munsell-chart server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let address = config.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            let e = munsell_chart::ChartError::from(e);
            tracing::error!("❌ Failed to bind {}: {}", address, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let app = create_router(AppState::default());

    tracing::info!("✅ Server running on port {}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
