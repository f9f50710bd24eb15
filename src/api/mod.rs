//! HTTP API module: router, handlers, and the serve loop.

pub mod handlers;
pub mod routes;

use std::future::Future;

use tokio::net::TcpListener;

use crate::error::Result;

pub use handlers::AppState;
pub use routes::create_router;

/// Serve the API on an already-bound listener until `shutdown` resolves.
///
/// Graceful: once `shutdown` completes, the listener stops accepting
/// and in-flight requests run to completion before this returns.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
