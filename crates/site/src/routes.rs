//! Router assembly.

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health));

    // Public pages
    let page_routes = Router::new()
        .route("/", get(handlers::pages::index))
        .route(
            "/contact",
            get(handlers::contact::show).post(handlers::contact::submit),
        )
        .route("/portfolio", get(handlers::pages::portfolio_list))
        .route("/portfolio/{id}", get(handlers::pages::portfolio_detail))
        .route("/blog", get(handlers::pages::blog_list))
        .route("/blog/{id}", get(handlers::pages::blog_detail));

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .nest_service("/static", static_files)
        .fallback(handlers::pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
