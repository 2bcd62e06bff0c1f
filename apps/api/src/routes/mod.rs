pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::career::handlers as career;
use crate::mindmap::handlers as mindmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI routes: each falls back to static data when the model fails
        .route("/api/generate-mindmap", post(mindmap::handle_generate_mind_map))
        .route("/api/expand-node", post(mindmap::handle_expand_node))
        .route("/api/career-details", post(career::handle_career_details))
        .route(
            "/api/career-suggestions",
            post(career::handle_career_suggestions),
        )
        .route("/api/career-roadmap", post(career::handle_career_roadmap))
        // Persistence
        .route(
            "/api/mindmaps",
            get(mindmap::handle_list_mind_maps).post(mindmap::handle_save_mind_map),
        )
        .route("/api/mindmaps/:id", get(mindmap::handle_get_mind_map))
        .with_state(state)
}
