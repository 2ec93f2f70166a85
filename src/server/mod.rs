pub mod router;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::core::error::AppError;

pub use router::build_router;

pub async fn serve(config: &ServerConfig) -> Result<(), AppError> {
    let addr = config.socket_addr();
    tracing::info!(%addr, "starting mock server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind {addr}: {err}")))?;
    axum::serve(listener, build_router())
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}
