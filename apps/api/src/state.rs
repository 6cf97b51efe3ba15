use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::embedding::Embedder;
use crate::llm_client::StructuredGenerator;
use crate::opportunities::store::OpportunityStore;
use crate::recommendations::store::RecommendationStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. The trait objects are the engines' seams: production wires in
/// the HTTP-backed implementations, tests swap in doubles.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: Arc<dyn StructuredGenerator>,
    pub embedder: Arc<dyn Embedder>,
    pub opportunities: Arc<dyn OpportunityStore>,
    pub recommendations: Arc<dyn RecommendationStore>,
    pub config: Config,
}
