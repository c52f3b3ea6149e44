//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    cancel_handler, chat_handler, health_handler, pay_handler, success_handler,
};
use crate::server::static_files::serve_public;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Every handler reaches its upstream service through the trait objects in
/// `ServerDeps`; there is no other shared state.
pub fn build_app(deps: Arc<ServerDeps>) -> Router {
    let app_state = AxumAppState { deps };

    // CORS configuration - the chat page may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Chat completion relay
        .route("/chat", post(chat_handler))
        // Payment flow: create, then the provider redirects back to one of
        // the two callback routes
        .route("/pay", post(pay_handler))
        .route("/success", get(success_handler))
        .route("/cancel", get(cancel_handler))
        // Health check
        .route("/health", get(health_handler))
        // Static assets at the server root
        .fallback(serve_public)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
