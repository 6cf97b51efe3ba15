//! Opportunity catalog access.
//!
//! The catalog is seeded out-of-band and read-only here, so the store exposes
//! exactly the two read paths the service needs: vector retrieval for the
//! matching engine and substring search for the advisory tools.

use async_trait::async_trait;
use pgvector::Vector;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::opportunity::{Industry, Opportunity, OpportunityType, RetrievedOpportunity};

/// Most rows a substring search will return.
const SEARCH_LIMIT: i64 = 20;

#[async_trait]
pub trait OpportunityStore: Send + Sync {
    /// K nearest opportunities to `embedding` by cosine distance, closest
    /// first. Coarse recall filter; ranking precision comes from re-ranking.
    async fn nearest_neighbors(
        &self,
        embedding: &[f32],
        k: i64,
    ) -> Result<Vec<RetrievedOpportunity>, AppError>;

    /// Case-insensitive substring match on title or description, with
    /// optional type/industry filters. Plain text lookup, not vector search.
    async fn search(
        &self,
        query: &str,
        opportunity_type: Option<OpportunityType>,
        industry: Option<Industry>,
    ) -> Result<Vec<Opportunity>, AppError>;
}

pub struct PgOpportunityStore {
    pool: PgPool,
}

impl PgOpportunityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OpportunityStore for PgOpportunityStore {
    async fn nearest_neighbors(
        &self,
        embedding: &[f32],
        k: i64,
    ) -> Result<Vec<RetrievedOpportunity>, AppError> {
        let query_vector = Vector::from(embedding.to_vec());
        let rows: Vec<RetrievedOpportunity> = sqlx::query_as(
            r#"
            SELECT id, title, org, opportunity_type, industry, location,
                   description, requirements, is_paid, url, deadline,
                   (embedding <=> $1)::float8 AS distance
            FROM opportunities
            ORDER BY embedding <=> $1
            LIMIT $2
            "#,
        )
        .bind(&query_vector)
        .bind(k)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn search(
        &self,
        query: &str,
        opportunity_type: Option<OpportunityType>,
        industry: Option<Industry>,
    ) -> Result<Vec<Opportunity>, AppError> {
        let pattern = format!("%{query}%");
        let rows: Vec<Opportunity> = sqlx::query_as(
            r#"
            SELECT id, title, org, opportunity_type, industry, location,
                   description, requirements, is_paid, url, deadline
            FROM opportunities
            WHERE (title ILIKE $1 OR description ILIKE $1)
              AND ($2::text IS NULL OR opportunity_type = $2)
              AND ($3::text IS NULL OR industry = $3)
            ORDER BY title
            LIMIT $4
            "#,
        )
        .bind(&pattern)
        .bind(opportunity_type.map(|t| t.as_str()))
        .bind(industry.map(|i| i.as_str()))
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
