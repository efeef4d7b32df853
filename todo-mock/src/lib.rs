//! Todo Mock - in-memory todo backend
//!
//! Serves the todo REST API from a seeded collection. Used by the client's
//! integration tests and for running the `todos` CLI locally.

pub mod api;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Default port, matching the client's default base URL
pub const DEFAULT_PORT: u16 = 4567;

/// Build the application router
pub fn build_app(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

/// Serve `state` on an already bound listener
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, build_app(state)).await
}

/// Start a server on an ephemeral localhost port
///
/// Returns the bound address and the server task.
pub async fn spawn(state: AppState) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener, state).await {
            tracing::error!(error = %e, "Mock server stopped");
        }
    });

    Ok((addr, handle))
}
