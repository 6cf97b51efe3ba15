pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::opportunities::handlers as opportunities;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Onboarding pipeline
        .route("/api/v1/cv/parse", post(profile::handle_parse_cv))
        .route("/api/v1/profile", post(profile::handle_generate_profile))
        // Matching pipeline
        .route("/api/v1/match", post(matching::handle_match))
        .route(
            "/api/v1/recommendations",
            get(matching::handle_list_recommendations),
        )
        // Advisory tool sub-queries
        .route(
            "/api/v1/recommendations/explain",
            get(matching::handle_explain_recommendation),
        )
        .route(
            "/api/v1/opportunities/search",
            get(opportunities::handle_search),
        )
        .with_state(state)
}
