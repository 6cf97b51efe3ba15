//! Recommendation persistence.
//!
//! One row per (user, opportunity) pair, enforced by a unique index; the
//! upsert replaces in place so re-matching never accumulates duplicates.
//! Reads always sort on the persisted fit score — the canonical order is what
//! is in the table, not the transient order re-ranking completed in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::opportunity::Opportunity;
use crate::models::recommendation::{
    NewRecommendation, RecommendationRow, RecommendationWithOpportunity,
};

#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Inserts or replaces the row for (user, opportunity).
    async fn upsert(&self, rec: &NewRecommendation) -> Result<(), AppError>;

    /// Persisted rows for a candidate, fit score descending. Ties break on
    /// created_at (newest first) then opportunity id, so equal inputs always
    /// list in the same order.
    async fn list_by_candidate(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<RecommendationWithOpportunity>, AppError>;

    /// Most recent recommendation whose opportunity title matches the
    /// substring, for the advisory explain tool.
    async fn find_by_opportunity_title(
        &self,
        user_id: Uuid,
        title_query: &str,
    ) -> Result<Option<RecommendationWithOpportunity>, AppError>;
}

pub struct PgRecommendationStore {
    pool: PgPool,
}

impl PgRecommendationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat join row; split into the nested API shape below.
#[derive(Debug, FromRow)]
struct JoinRow {
    id: Uuid,
    user_id: Uuid,
    opportunity_id: Uuid,
    fit_score: i32,
    fit_explanation: String,
    gaps: String,
    actions: Vec<String>,
    created_at: DateTime<Utc>,
    title: String,
    org: String,
    opportunity_type: String,
    industry: String,
    location: String,
    description: String,
    requirements: Vec<String>,
    is_paid: bool,
    url: Option<String>,
    deadline: Option<chrono::NaiveDate>,
}

impl From<JoinRow> for RecommendationWithOpportunity {
    fn from(row: JoinRow) -> Self {
        RecommendationWithOpportunity {
            recommendation: RecommendationRow {
                id: row.id,
                user_id: row.user_id,
                opportunity_id: row.opportunity_id,
                fit_score: row.fit_score,
                fit_explanation: row.fit_explanation,
                gaps: row.gaps,
                actions: row.actions,
                created_at: row.created_at,
            },
            opportunity: Opportunity {
                id: row.opportunity_id,
                title: row.title,
                org: row.org,
                opportunity_type: row.opportunity_type,
                industry: row.industry,
                location: row.location,
                description: row.description,
                requirements: row.requirements,
                is_paid: row.is_paid,
                url: row.url,
                deadline: row.deadline,
            },
        }
    }
}

const JOIN_SELECT: &str = r#"
    SELECT r.id, r.user_id, r.opportunity_id, r.fit_score, r.fit_explanation,
           r.gaps, r.actions, r.created_at,
           o.title, o.org, o.opportunity_type, o.industry, o.location,
           o.description, o.requirements, o.is_paid, o.url, o.deadline
    FROM recommendations r
    JOIN opportunities o ON o.id = r.opportunity_id
"#;

#[async_trait]
impl RecommendationStore for PgRecommendationStore {
    async fn upsert(&self, rec: &NewRecommendation) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO recommendations
                (id, user_id, opportunity_id, fit_score, fit_explanation, gaps, actions, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            ON CONFLICT (user_id, opportunity_id) DO UPDATE SET
                fit_score = EXCLUDED.fit_score,
                fit_explanation = EXCLUDED.fit_explanation,
                gaps = EXCLUDED.gaps,
                actions = EXCLUDED.actions,
                created_at = now()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(rec.user_id)
        .bind(rec.opportunity_id)
        .bind(rec.fit_score)
        .bind(&rec.fit_explanation)
        .bind(&rec.gaps)
        .bind(&rec.actions)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_by_candidate(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<RecommendationWithOpportunity>, AppError> {
        let sql = format!(
            "{JOIN_SELECT} WHERE r.user_id = $1 \
             ORDER BY r.fit_score DESC, r.created_at DESC, r.opportunity_id ASC \
             LIMIT $2"
        );
        let rows: Vec<JoinRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_opportunity_title(
        &self,
        user_id: Uuid,
        title_query: &str,
    ) -> Result<Option<RecommendationWithOpportunity>, AppError> {
        let sql = format!(
            "{JOIN_SELECT} WHERE r.user_id = $1 AND o.title ILIKE $2 \
             ORDER BY r.created_at DESC \
             LIMIT 1"
        );
        let row: Option<JoinRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .bind(format!("%{title_query}%"))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }
}
