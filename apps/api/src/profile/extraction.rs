//! Profile Extraction Engine.
//!
//! Three phases with distinct epistemic status:
//! 1. A generative call extracts CV facts (education, domain skills,
//!    languages, logistics) and meta-level Big-Five/RIASEC inference, with an
//!    evidence citation for every extreme score.
//! 2. Questionnaire answers apply the deterministic adjustment tables from
//!    [`super::adjustments`] — pure code, no model involved.
//! 3. Any Big-Five field outside the neutral band without a citation from
//!    phase 1 or a touched dimension from phase 2 is forced back into the
//!    band. Weak evidence can never produce an extreme score.
//!
//! The engine is a pure transform; persistence belongs to the caller.

use std::collections::HashSet;

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::{GenerationError, StructuredGenerator};
use crate::models::cv::{CvData, Interests, PersonalityAnswers};
use crate::models::profile::{EducationStatus, RichProfile};
use crate::profile::adjustments::apply_questionnaire;
use crate::profile::prompts::PROFILE_EXTRACTION_SYSTEM;

/// Scores outside this band require explicit evidence.
pub const NEUTRAL_BAND_LOW: i32 = 40;
pub const NEUTRAL_BAND_HIGH: i32 = 60;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("output violates the 13-section profile schema: {0}")]
    Schema(String),
}

/// One citation tying a dimension score to a concrete CV fact.
#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceCitation {
    pub dimension: String,
    #[allow(dead_code)]
    pub source: String,
}

/// Wire shape of the generative extraction call.
#[derive(Debug, Deserialize)]
struct GenerativeExtraction {
    profile: RichProfile,
    #[serde(default)]
    evidence: Vec<EvidenceCitation>,
}

/// Runs the full three-phase extraction. Returns a complete profile (every
/// section, every field) or an [`ExtractionError`]; never a partial profile.
pub async fn extract_profile(
    generator: &dyn StructuredGenerator,
    cv: &CvData,
    answers: &PersonalityAnswers,
    interests: &Interests,
) -> Result<RichProfile, ExtractionError> {
    let user_input = build_cv_input(cv, interests);
    let value = generator
        .generate_json(PROFILE_EXTRACTION_SYSTEM, &user_input)
        .await?;

    let GenerativeExtraction {
        mut profile,
        evidence,
    } = serde_json::from_value(value).map_err(|e| ExtractionError::Schema(e.to_string()))?;

    normalize(&mut profile);

    let mut evidenced: HashSet<String> = evidence.into_iter().map(|c| c.dimension).collect();
    for dimension in apply_questionnaire(&mut profile, answers) {
        evidenced.insert(dimension.to_string());
    }

    let clamped = clamp_unevidenced(&mut profile, &evidenced);
    if clamped > 0 {
        debug!("evidential clamp pulled {clamped} Big-Five scores back into the neutral band");
    }

    Ok(profile)
}

/// Deterministic re-checks over the generative output. The model is told all
/// of this, but range and status invariants are enforced here regardless.
fn normalize(profile: &mut RichProfile) {
    let today = Utc::now().date_naive();

    for record in &mut profile.education_records {
        record.degree_level_isced = record.degree_level_isced.clamp(0, 8);
        if let Some(score) = record.academic_score_normalized.as_mut() {
            *score = score.clamp(0.0, 1.0);
        }
        // Complete iff an end date exists and is not in the future.
        if record.status != EducationStatus::Withdrawn {
            record.status = match record.completion_date {
                Some(date) if date <= today => EducationStatus::Complete,
                _ => EducationStatus::InProgress,
            };
        }
    }

    profile.big_five.clamp_to_range();
    profile.vocational.clamp_to_range();
    profile.universal_skills.clamp_to_range();
    profile.stem_it.clamp_to_range();
    profile.healthcare.clamp_to_range();
    profile.arts_media.clamp_to_range();
    profile.trades_logistics.clamp_to_range();
    profile.legal_edu_social.clamp_to_range();
    profile.business.clamp_to_range();
    profile.esg.clamp_to_range();
    profile.languages.clamp_to_range();

    let logistics = &mut profile.user_logistics;
    logistics.remote_preference_score = logistics.remote_preference_score.clamp(1, 10);
    logistics.travel_willingness_percentage =
        logistics.travel_willingness_percentage.clamp(0, 100);
}

/// Phase 3: forces unevidenced Big-Five scores back into the neutral band.
/// Returns how many fields were clamped.
fn clamp_unevidenced(profile: &mut RichProfile, evidenced: &HashSet<String>) -> usize {
    let mut clamped = 0;
    for (name, value) in profile.big_five.fields_mut() {
        let outside = *value < NEUTRAL_BAND_LOW || *value > NEUTRAL_BAND_HIGH;
        if outside && !evidenced.contains(name) {
            *value = (*value).clamp(NEUTRAL_BAND_LOW, NEUTRAL_BAND_HIGH);
            clamped += 1;
        }
    }
    clamped
}

/// Renders the CV and interests into the user message for the generative
/// call. The questionnaire never appears here: its effect on the profile is
/// entirely table-driven.
fn build_cv_input(cv: &CvData, interests: &Interests) -> String {
    let education_lines: Vec<String> = cv
        .education
        .iter()
        .map(|e| {
            let end = e
                .end_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "present".to_string());
            let gpa = e
                .gpa
                .as_deref()
                .map(|g| format!(", GPA: {g}"))
                .unwrap_or_default();
            format!(
                "  - {} in {}, {} ({}–{}){}",
                e.degree, e.field, e.institution, e.start_year, end, gpa
            )
        })
        .collect();

    let experience_lines: Vec<String> = cv
        .experience
        .iter()
        .map(|e| {
            let end = e.end_date.as_deref().unwrap_or("present");
            format!(
                "  - {} at {} ({}–{})\n    {}",
                e.title, e.company, e.start_date, end, e.description
            )
        })
        .collect();

    let or_none = |items: &[String]| {
        if items.is_empty() {
            "(none listed)".to_string()
        } else {
            items.join(", ")
        }
    };

    format!(
        "=== CURRICULUM VITAE ===\n\
        Name: {}{}\n\n\
        Education:\n{}\n\n\
        Work Experience:\n{}\n\n\
        Skills: {}\n\n\
        Languages: {}\n\n\
        Certifications: {}\n\n\
        === INTERESTS ===\n\
        Favourite book: {}\n\
        Favourite movie: {}\n\
        Other: {}",
        cv.name,
        cv.email
            .as_deref()
            .map(|e| format!("\nEmail: {e}"))
            .unwrap_or_default(),
        if education_lines.is_empty() {
            "  (none listed)".to_string()
        } else {
            education_lines.join("\n")
        },
        if experience_lines.is_empty() {
            "  (none listed)".to_string()
        } else {
            experience_lines.join("\n")
        },
        or_none(&cv.skills),
        or_none(&cv.languages),
        or_none(&cv.certifications),
        interests.favourite_book.as_deref().unwrap_or("N/A"),
        interests.favourite_movie.as_deref().unwrap_or("N/A"),
        interests.other.as_deref().unwrap_or("N/A"),
    )
}
