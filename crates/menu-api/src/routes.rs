use axum::{routing::get, Router};

use crate::handlers::{health, menu, page};
use crate::state::AppState;

/// All routes; CORS and tracing layers are added by the binary.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu routes
        .route("/api/v1/menus/{menu_name}/tree", get(menu::menu_tree))
        .route("/api/v1/menus/{menu_name}/render", get(menu::render_menu))
        // Every other path is a page with the default menu
        .fallback(page::page)
        .with_state(state)
}
