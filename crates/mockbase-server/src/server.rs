use std::{future::Future, net::SocketAddr, sync::Arc};

use mockbase::{DocumentStore, Records, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::router::create_router;

/// Binds `addr` and serves `records` until the process receives Ctrl-C.
///
/// # Errors
///
/// Returns [`mockbase::MockbaseError::Io`] if the address cannot be bound or the
/// server fails while accepting connections.
pub async fn start_server<S: DocumentStore + 'static>(addr: SocketAddr, records: Arc<Records<S>>) -> Result<()> {
    info!("Starting Mockbase server on {}", addr);
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    serve(listener, records, shutdown_signal()).await
}

/// Serves `records` on an already bound listener until `shutdown` completes.
/// Requests in flight when `shutdown` fires are allowed to finish.
///
/// # Errors
///
/// Returns [`mockbase::MockbaseError::Io`] if the server fails while accepting
/// connections.
pub async fn serve<S, F>(listener: TcpListener, records: Arc<Records<S>>, shutdown: F) -> Result<()>
where
    S: DocumentStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(records);
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Completes on Ctrl-C. If the signal handler cannot be installed the server
/// keeps running until it is killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for the shutdown signal: {}", e);
            std::future::pending::<()>().await;
        },
    }
}
