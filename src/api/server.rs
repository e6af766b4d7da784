//! # API HTTP Server
//!
//! Axum-based HTTP server for the versioned list endpoints. One route
//! carries the whole surface: `GET /api/:version/:collection`, dispatched
//! through the resource registry. A health probe lives at `/health`.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::observability::Logger;

use super::config::ApiServerConfig;
use super::errors::ApiError;
use super::registry::ResourceRegistry;
use super::version::ApiVersion;

/// API server state
pub struct ApiServer {
    config: ApiServerConfig,
    registry: Arc<ResourceRegistry>,
}

impl ApiServer {
    /// Create a server with default configuration
    pub fn new(registry: Arc<ResourceRegistry>) -> Self {
        Self::with_config(ApiServerConfig::default(), registry)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: ApiServerConfig, registry: Arc<ResourceRegistry>) -> Self {
        Self { config, registry }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        let cors = if self.config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/api/:version/:collection", get(list_handler))
            .with_state(self.registry.clone())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bind address: {}", e)))?;

        let route_count = self.registry.routes().len().to_string();
        Logger::info(
            "API_SERVER_START",
            &[
                ("addr", &addr.to_string()),
                ("resources", &route_count),
            ],
        );

        let router = self.router();
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// List records handler
///
/// The only data route: parse the version segment, look the pair up in
/// the registry, hand the full record sequence to the serializer.
async fn list_handler(
    State(registry): State<Arc<ResourceRegistry>>,
    Path((version, collection)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let parsed =
        ApiVersion::parse(&version).ok_or_else(|| ApiError::InvalidVersion(version.clone()))?;

    let resource = registry
        .get(parsed, &collection)
        .ok_or_else(|| ApiError::UnknownResource {
            version: version.clone(),
            collection: collection.clone(),
        })?;

    let records = resource.handler.list()?;
    let body = resource.serializer.serialize_collection(&records);

    let request_id = Uuid::new_v4().to_string();
    let count = records.len().to_string();
    Logger::info(
        "REQUEST_SERVED",
        &[
            ("collection", collection.as_str()),
            ("count", &count),
            ("request_id", &request_id),
            ("version", version.as_str()),
        ],
    );

    Ok(Json(body))
}
