use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::engine::{run_matching, MatchingError, RERANK_N};
use crate::models::candidate::{ProfileRow, StoredProfile};
use crate::models::recommendation::RecommendationWithOpportunity;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationWithOpportunity>,
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let row: Option<ProfileRow> = sqlx::query_as(
        "SELECT user_id, cv_data, rich_profile, interests, embedding, updated_at \
         FROM profiles WHERE user_id = $1",
    )
    .bind(req.user_id)
    .fetch_optional(&state.db)
    .await?;

    let profile: StoredProfile = row
        .ok_or(AppError::Matching(MatchingError::NoProfile))?
        .into();

    let recommendations = run_matching(
        &profile,
        state.opportunities.as_ref(),
        state.recommendations.as_ref(),
        state.llm.clone(),
    )
    .await?;

    Ok(Json(RecommendationsResponse { recommendations }))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub user_id: Uuid,
    pub limit: Option<i64>,
}

/// GET /api/v1/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let limit = params.limit.unwrap_or(RERANK_N as i64).clamp(1, 50);
    let recommendations = state
        .recommendations
        .list_by_candidate(params.user_id, limit)
        .await?;
    Ok(Json(RecommendationsResponse { recommendations }))
}

#[derive(Debug, Deserialize)]
pub struct ExplainQuery {
    pub user_id: Uuid,
    pub title: String,
}

/// GET /api/v1/recommendations/explain
///
/// Advisory tool contract: returns the most recent persisted recommendation
/// whose opportunity title matches the substring, verbatim.
pub async fn handle_explain_recommendation(
    State(state): State<AppState>,
    Query(params): Query<ExplainQuery>,
) -> Result<Json<RecommendationWithOpportunity>, AppError> {
    let found = state
        .recommendations
        .find_by_opportunity_title(params.user_id, &params.title)
        .await?;
    let rec = found.ok_or_else(|| {
        AppError::NotFound(format!(
            "No recommendation found for an opportunity matching '{}'",
            params.title
        ))
    })?;
    Ok(Json(rec))
}
