use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One education entry as parsed from the CV document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvEducation {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvExperience {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

/// Structured CV contents. Produced once by the CV parse endpoint and passed
/// back in by the onboarding flow; the extraction engine never re-reads the
/// original document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvData {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub education: Vec<CvEducation>,
    pub skills: Vec<String>,
    pub experience: Vec<CvExperience>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

/// question-id → selected option value, for the fixed question set in
/// `profile::questions`. Unknown ids carry no adjustment and are ignored.
pub type PersonalityAnswers = HashMap<String, String>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interests {
    #[serde(default)]
    pub favourite_book: Option<String>,
    #[serde(default)]
    pub favourite_movie: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}
