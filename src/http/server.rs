use crate::config::toml_config::ServerConfig;
use crate::http::routes;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub async fn bind(config: &ServerConfig) -> Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;
    Ok((listener, addr))
}

pub async fn serve_on<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    config.validate()?;

    let app = routes::app(&config.cors)?;
    let (listener, addr) = bind(&config).await?;

    tracing::info!("🚀 Roman ↔ Arabic API listening on http://{}", addr);
    if config.cors.is_permissive() {
        tracing::debug!("CORS: permissive");
    } else {
        tracing::info!("CORS origins: {}", config.cors.allowed_origins.join(", "));
    }

    serve_on(listener, app, shutdown_signal()).await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
