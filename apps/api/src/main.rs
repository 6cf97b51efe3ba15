mod config;
mod db;
mod embedding;
mod errors;
mod extract;
mod llm_client;
mod matching;
mod models;
mod opportunities;
mod profile;
mod recommendations;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::embedding::HttpEmbedder;
use crate::llm_client::LlmClient;
use crate::opportunities::store::PgOpportunityStore;
use crate::recommendations::store::PgRecommendationStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = Arc::new(LlmClient::new(config.anthropic_api_key.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize embedder
    let embedder = Arc::new(HttpEmbedder::new(
        config.embeddings_api_url.clone(),
        config.embeddings_api_key.clone(),
        config.embedding_dimension,
    ));
    info!(
        "Embedding client initialized (dimension: {})",
        config.embedding_dimension
    );

    // Build app state
    let state = AppState {
        db: db.clone(),
        llm,
        embedder,
        opportunities: Arc::new(PgOpportunityStore::new(db.clone())),
        recommendations: Arc::new(PgRecommendationStore::new(db)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
