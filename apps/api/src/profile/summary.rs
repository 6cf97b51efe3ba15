//! Builds the text document handed to the embedder.
//!
//! Deliberately low-cardinality: a handful of skills, the top RIASEC codes,
//! the strongest languages, the five Big-Five overalls and one education
//! line. Dumping the whole profile into the embedding drowns the signal that
//! makes nearest-neighbor retrieval discriminate.

use crate::models::cv::CvData;
use crate::models::profile::RichProfile;

pub const TOP_SKILLS: usize = 8;
pub const TOP_RIASEC: usize = 3;
pub const TOP_LANGUAGES: usize = 5;

pub fn build_embedding_document(cv: &CvData, profile: &RichProfile) -> String {
    let mut lines = Vec::new();

    let skills: Vec<&str> = cv
        .skills
        .iter()
        .take(TOP_SKILLS)
        .map(String::as_str)
        .collect();
    if !skills.is_empty() {
        lines.push(format!("Skills: {}", skills.join(", ")));
    }

    let mut riasec = profile.vocational.riasec_scores();
    riasec.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties keep R-I-A-S-E-C order
    let codes: Vec<&str> = riasec.iter().take(TOP_RIASEC).map(|(n, _)| *n).collect();
    lines.push(format!("Vocational interests: {}", codes.join(", ")));

    let mut languages: Vec<(&str, i32)> = profile
        .languages
        .clone()
        .proficiencies()
        .into_iter()
        .filter(|(_, score)| *score > 0)
        .collect();
    languages.sort_by(|a, b| b.1.cmp(&a.1));
    if !languages.is_empty() {
        let spoken: Vec<String> = languages
            .iter()
            .take(TOP_LANGUAGES)
            .map(|(name, score)| format!("{} ({score}/10)", capitalize(name)))
            .collect();
        lines.push(format!("Languages: {}", spoken.join(", ")));
    }

    let bf = &profile.big_five;
    lines.push(format!(
        "Personality: openness {}, conscientiousness {}, extraversion {}, agreeableness {}, neuroticism {}",
        bf.openness_overall,
        bf.conscientiousness_overall,
        bf.extraversion_overall,
        bf.agreeableness_overall,
        bf.neuroticism_overall,
    ));

    let education = profile
        .education_records
        .iter()
        .max_by_key(|r| r.degree_level_isced);
    match education {
        Some(record) => lines.push(format!(
            "Education: {} in {} (ISCED {})",
            record.program_name, record.field_of_study_isco_category, record.degree_level_isced
        )),
        None => lines.push("Education: none listed".to_string()),
    }

    lines.join("\n")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationRecord, EducationStatus, InstitutionType};

    fn cv_with_skills(skills: &[&str]) -> CvData {
        CvData {
            name: "Test".to_string(),
            email: None,
            education: vec![],
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: vec![],
            languages: vec![],
            certifications: vec![],
        }
    }

    #[test]
    fn test_skills_truncated_to_top_n() {
        let skills: Vec<String> = (0..12).map(|i| format!("skill{i}")).collect();
        let refs: Vec<&str> = skills.iter().map(String::as_str).collect();
        let doc = build_embedding_document(&cv_with_skills(&refs), &RichProfile::neutral());
        assert!(doc.contains("skill7"));
        assert!(!doc.contains("skill8"));
    }

    #[test]
    fn test_top_three_riasec_codes_by_score() {
        let mut profile = RichProfile::neutral();
        profile.vocational.riasec_investigative = 80;
        profile.vocational.riasec_realistic = 70;
        profile.vocational.riasec_social = 65;
        let doc = build_embedding_document(&cv_with_skills(&[]), &profile);
        assert!(doc.contains("Vocational interests: Investigative, Realistic, Social"));
        assert!(!doc.contains("Enterprising"));
    }

    #[test]
    fn test_languages_ranked_by_proficiency() {
        let mut profile = RichProfile::neutral();
        profile.languages.lang_english = 6;
        profile.languages.lang_cantonese = 10;
        profile.languages.lang_french = 2;
        let doc = build_embedding_document(&cv_with_skills(&[]), &profile);
        let cantonese = doc.find("Cantonese (10/10)").unwrap();
        let english = doc.find("English (6/10)").unwrap();
        assert!(cantonese < english);
        assert!(doc.contains("French (2/10)"));
    }

    #[test]
    fn test_languages_truncated_to_top_n() {
        let mut profile = RichProfile::neutral();
        profile.languages.lang_english = 10;
        profile.languages.lang_cantonese = 9;
        profile.languages.lang_mandarin = 8;
        profile.languages.lang_french = 7;
        profile.languages.lang_german = 6;
        profile.languages.lang_spanish = 5;
        let doc = build_embedding_document(&cv_with_skills(&[]), &profile);
        assert!(doc.contains("German"));
        assert!(!doc.contains("Spanish"));
    }

    #[test]
    fn test_highest_isced_education_wins() {
        let mut profile = RichProfile::neutral();
        let record = |program: &str, isced: i32| EducationRecord {
            institution_type: InstitutionType::University,
            degree_level_isced: isced,
            field_of_study_isco_category: "Science and mathematics".to_string(),
            program_name: program.to_string(),
            start_date: None,
            completion_date: None,
            status: EducationStatus::Complete,
            academic_score_normalized: None,
        };
        profile.education_records = vec![record("BSc Physics", 6), record("PhD Physics", 8)];
        let doc = build_embedding_document(&cv_with_skills(&[]), &profile);
        assert!(doc.contains("PhD Physics"));
        assert!(doc.contains("ISCED 8"));
        assert!(!doc.contains("BSc Physics"));
    }

    #[test]
    fn test_sparse_profile_still_produces_document() {
        let doc = build_embedding_document(&cv_with_skills(&[]), &RichProfile::neutral());
        assert!(doc.contains("Education: none listed"));
        assert!(doc.contains("Personality: openness 50"));
        assert!(!doc.contains("Skills:"));
        assert!(!doc.contains("Languages:"));
    }
}
