use chrono::{DateTime, Utc};
use pgvector::Vector;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::cv::{CvData, Interests};
use crate::models::profile::RichProfile;

/// Raw `profiles` row. One per user; re-running extraction overwrites the
/// whole row, it is never patched field by field.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub cv_data: Json<CvData>,
    pub rich_profile: Json<RichProfile>,
    pub interests: Json<Interests>,
    pub embedding: Vector,
    pub updated_at: DateTime<Utc>,
}

/// In-memory candidate profile handed to the matching engine.
#[derive(Debug, Clone)]
pub struct StoredProfile {
    pub user_id: Uuid,
    pub cv_data: CvData,
    pub rich_profile: RichProfile,
    pub interests: Interests,
    pub embedding: Vec<f32>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for StoredProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: row.user_id,
            cv_data: row.cv_data.0,
            rich_profile: row.rich_profile.0,
            interests: row.interests.0,
            embedding: row.embedding.to_vec(),
            updated_at: row.updated_at,
        }
    }
}

/// What the profile endpoint returns to the onboarding flow.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub rich_profile: RichProfile,
    pub updated_at: DateTime<Utc>,
}
