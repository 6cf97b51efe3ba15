use axum::extract::{Multipart, State};
use axum::Json;
use chrono::{DateTime, Utc};
use pgvector::Vector;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::embedding::EmbeddingError;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm_client::decode_structured;
use crate::models::candidate::ProfileResponse;
use crate::models::cv::{CvData, Interests, PersonalityAnswers};
use crate::profile::extraction::extract_profile;
use crate::profile::prompts::{CV_PARSE_PROMPT_TEMPLATE, CV_PARSE_SYSTEM};
use crate::profile::summary::build_embedding_document;
use crate::state::AppState;

/// POST /api/v1/cv/parse
///
/// Multipart upload → plain text → structured `CvData`. Nothing is persisted;
/// the onboarding flow holds the parsed CV until profile generation.
pub async fn handle_parse_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CvData>, AppError> {
    let mut file: Option<(Option<String>, bytes::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;
            file = Some((content_type, data));
            break;
        }
    }

    let (content_type, data) =
        file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let text = extract_text(&data, content_type.as_deref())?;
    info!("extracted {} chars from uploaded CV", text.len());

    let prompt = CV_PARSE_PROMPT_TEMPLATE.replace("{cv_text}", &text);
    let value = state.llm.generate_json(CV_PARSE_SYSTEM, &prompt).await?;
    let cv: CvData = decode_structured(value)?;

    Ok(Json(cv))
}

#[derive(Debug, Deserialize)]
pub struct GenerateProfileRequest {
    pub user_id: Uuid,
    pub cv_data: CvData,
    #[serde(default)]
    pub answers: PersonalityAnswers,
    #[serde(default)]
    pub interests: Interests,
}

/// POST /api/v1/profile
///
/// Runs the full extraction pipeline and overwrites the candidate's stored
/// profile. All-or-nothing: an extraction or embedding failure leaves the
/// previous row untouched.
pub async fn handle_generate_profile(
    State(state): State<AppState>,
    Json(req): Json<GenerateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let rich_profile =
        extract_profile(state.llm.as_ref(), &req.cv_data, &req.answers, &req.interests).await?;

    let document = build_embedding_document(&req.cv_data, &rich_profile);
    let embedding = state.embedder.embed(&document).await?;

    // The index rejects nothing on its own: a wrong-dimension vector must
    // never reach the upsert.
    if embedding.len() != state.config.embedding_dimension {
        return Err(AppError::Embedding(EmbeddingError::DimensionMismatch {
            expected: state.config.embedding_dimension,
            actual: embedding.len(),
        }));
    }

    let updated_at: DateTime<Utc> = sqlx::query_scalar(
        r#"
        INSERT INTO profiles (user_id, cv_data, rich_profile, interests, embedding, updated_at)
        VALUES ($1, $2, $3, $4, $5, now())
        ON CONFLICT (user_id) DO UPDATE SET
            cv_data = EXCLUDED.cv_data,
            rich_profile = EXCLUDED.rich_profile,
            interests = EXCLUDED.interests,
            embedding = EXCLUDED.embedding,
            updated_at = now()
        RETURNING updated_at
        "#,
    )
    .bind(req.user_id)
    .bind(sqlx::types::Json(&req.cv_data))
    .bind(sqlx::types::Json(&rich_profile))
    .bind(sqlx::types::Json(&req.interests))
    .bind(Vector::from(embedding))
    .fetch_one(&state.db)
    .await?;

    info!(user_id = %req.user_id, "profile extracted and stored");

    Ok(Json(ProfileResponse {
        user_id: req.user_id,
        rich_profile,
        updated_at,
    }))
}
