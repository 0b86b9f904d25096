// Axum API Server Module
//
// Purpose: Serve static informational pages as HTML plus a JSON view of the
// render tree. Content is loaded once at startup and shared read-only.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::content::PageContent;
use crate::error::ContentError;
use crate::render::{PageRenderer, RenderTree};
use crate::web::handlers::about_page;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PageContent>,
}

impl AppState {
    pub fn new(content: PageContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    /// Built-in content unless the config names a content file.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ContentError> {
        let content = match &config.content_file {
            Some(path) => {
                tracing::info!("Loading page content from {}", path.display());
                PageContent::from_json_file(path)?
            }
            None => {
                tracing::info!("Using built-in page content");
                PageContent::about()
            }
        };
        Ok(Self::new(content))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageContent::about())
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages
        .route("/about", get(about_page))

        // Render tree (JSON)
        .route("/api/about", get(about_tree))

        .fallback(not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn about_tree(State(state): State<AppState>) -> Json<RenderTree> {
    Json(PageRenderer::render(&state.content))
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No route for {}", uri);
    AppError::NotFound(format!("No page at {}", uri.path()))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
