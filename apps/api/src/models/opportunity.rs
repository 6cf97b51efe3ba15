use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog entry. Seeded out-of-band with a precomputed embedding; read-only
/// from this service's perspective. The embedding column is only ever touched
/// inside the nearest-neighbor query, so it is not part of this struct.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    pub org: String,
    pub opportunity_type: String,
    pub industry: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub is_paid: bool,
    pub url: Option<String>,
    pub deadline: Option<NaiveDate>,
}

/// Retrieval-stage result: an opportunity plus its cosine distance to the
/// query embedding. Distance is informational; re-ranking ignores it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RetrievedOpportunity {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    Internship,
    GraduateProgram,
    Fellowship,
    Volunteer,
    FullTime,
    PartTime,
}

impl OpportunityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Internship => "internship",
            OpportunityType::GraduateProgram => "graduate_program",
            OpportunityType::Fellowship => "fellowship",
            OpportunityType::Volunteer => "volunteer",
            OpportunityType::FullTime => "full_time",
            OpportunityType::PartTime => "part_time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Finance,
    Consulting,
    SocialImpact,
    Government,
    Creative,
    Healthcare,
    Education,
    Other,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Consulting => "consulting",
            Industry::SocialImpact => "social_impact",
            Industry::Government => "government",
            Industry::Creative => "creative",
            Industry::Healthcare => "healthcare",
            Industry::Education => "education",
            Industry::Other => "other",
        }
    }
}
