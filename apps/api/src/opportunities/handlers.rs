use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::opportunity::{Industry, Opportunity, OpportunityType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub opportunity_type: Option<OpportunityType>,
    pub industry: Option<Industry>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub opportunities: Vec<Opportunity>,
}

/// GET /api/v1/opportunities/search
///
/// Advisory tool contract: plain substring search over the catalog, not
/// vector retrieval.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let opportunities = state
        .opportunities
        .search(&params.q, params.opportunity_type, params.industry)
        .await?;
    Ok(Json(SearchResponse { opportunities }))
}
