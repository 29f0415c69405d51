//! Application startup and lifecycle management.

use crate::config::ZenithConfig;
use crate::handlers;
use crate::services::HelplineTable;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, permissive_cors, request_id_middleware};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub helplines: Arc<HelplineTable>,
}

impl AppState {
    pub fn new(helplines: HelplineTable) -> Self {
        Self {
            helplines: Arc::new(helplines),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/chatbot", post(handlers::chatbot))
        .route("/api/exercises", get(handlers::list_exercises))
        .route("/api/ping", get(handlers::ping))
        .layer(
            TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>),
        )
        .layer(permissive_cors())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Loads the helpline dataset and binds the listener. Port 0 picks a free port.
    pub async fn build(config: ZenithConfig) -> Result<Self, AppError> {
        let helplines = HelplineTable::load(&config.helplines_path, &config.default_country)
            .map_err(|e| {
                tracing::error!("Failed to load helpline dataset: {}", e);
                e
            })?;

        Self::with_helplines(config, helplines).await
    }

    pub async fn with_helplines(
        config: ZenithConfig,
        helplines: HelplineTable,
    ) -> Result<Self, AppError> {
        let state = AppState::new(helplines);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("{} listening on port {}", config.service_name, port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn helplines(&self) -> &HelplineTable {
        &self.state.helplines
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(std::future::pending()).await
    }

    pub async fn run_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(signal)
            .await
    }
}
