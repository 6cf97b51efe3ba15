use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::opportunity::Opportunity;

/// Re-rank output for one (candidate, opportunity) pair, before persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecommendation {
    pub user_id: Uuid,
    pub opportunity_id: Uuid,
    pub fit_score: i32,
    pub fit_explanation: String,
    pub gaps: String,
    pub actions: Vec<String>,
}

/// Persisted recommendation row. At most one per (user, opportunity) pair;
/// re-matching replaces it in place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub opportunity_id: Uuid,
    pub fit_score: i32,
    pub fit_explanation: String,
    pub gaps: String,
    pub actions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Read-path shape: the persisted row joined with its opportunity, the way
/// the dashboard and advisory tools consume it.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationWithOpportunity {
    #[serde(flatten)]
    pub recommendation: RecommendationRow,
    pub opportunity: Opportunity,
}
