//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the relay handler
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until shutdown is signalled

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::dogs;
use crate::http::request::{MakeRequestUuidV4, RequestIdExt};
use crate::upstream::{DogApiClient, UpstreamError};

/// Application state injected into handlers.
///
/// Holds only the upstream client, whose credential is fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub upstream: DogApiClient,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        let upstream = DogApiClient::new(&config.upstream)?;
        let router = Self::build_router(AppState { upstream });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request.headers().request_id(),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::x_request_id());

        Router::new()
            .route("/api/dogs", get(dogs::get_dogs))
            .with_state(state)
            .layer(middleware)
    }

    /// Clone of the router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on the given listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("Server is running on http://localhost:{}", addr.port());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
