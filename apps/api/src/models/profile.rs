#![allow(dead_code)]

//! The 13-section psychometric profile.
//!
//! Every section is a fixed struct, not a map: serde's strict struct decoding
//! rejects generator output with a missing section or field, which is the
//! schema-completeness guarantee the extraction engine relies on. JSON keys
//! mirror the stored `rich_profile` column shape exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Declares a score section: fixed fields of one numeric range with a shared
/// neutral default, plus mutable field access for the adjustment and clamp
/// passes.
macro_rules! score_section {
    ($name:ident, default = $def:expr, range = $lo:literal..=$hi:literal, { $($field:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            $(pub $field: i32,)+
        }

        impl $name {
            /// (field name, mutable score) pairs, in declaration order.
            pub fn fields_mut(&mut self) -> Vec<(&'static str, &mut i32)> {
                vec![$((stringify!($field), &mut self.$field),)+]
            }

            pub fn clamp_to_range(&mut self) {
                $(self.$field = self.$field.clamp($lo, $hi);)+
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $($field: $def,)+ }
            }
        }
    };
}

// ─── User logistics ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLogistics {
    pub current_location_geo: Option<GeoPoint>,
    pub availability_start_date: Option<NaiveDate>,
    /// 1 = prefers onsite, 10 = prefers remote.
    pub remote_preference_score: i32,
    pub travel_willingness_percentage: i32,
}

impl Default for UserLogistics {
    fn default() -> Self {
        Self {
            current_location_geo: None,
            availability_start_date: None,
            remote_preference_score: 5,
            travel_willingness_percentage: 0,
        }
    }
}

// ─── Education ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InstitutionType {
    University,
    #[serde(rename = "Community College")]
    CommunityCollege,
    #[serde(rename = "Trade School")]
    TradeSchool,
    Conservatory,
    Apprenticeship,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EducationStatus {
    Complete,
    #[serde(rename = "In Progress")]
    InProgress,
    Withdrawn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub institution_type: InstitutionType,
    /// ISCED-2011 ordinal, 0 (none) through 8 (doctoral).
    pub degree_level_isced: i32,
    pub field_of_study_isco_category: String,
    pub program_name: String,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub status: EducationStatus,
    pub academic_score_normalized: Option<f64>,
}

// ─── Psychometrics (0–100, neutral 50) ──────────────────────────────────────

score_section!(PsychometricsBigFive, default = 50, range = 0..=100, {
    openness_overall,
    openness_imagination,
    openness_artistic_interests,
    openness_emotionality,
    openness_adventurousness,
    openness_intellect,
    openness_liberalism,
    conscientiousness_overall,
    conscientiousness_self_efficacy,
    conscientiousness_orderliness,
    conscientiousness_dutifulness,
    conscientiousness_achievement_striving,
    conscientiousness_self_discipline,
    conscientiousness_cautiousness,
    extraversion_overall,
    extraversion_friendliness,
    extraversion_gregariousness,
    extraversion_assertiveness,
    extraversion_activity_level,
    extraversion_excitement_seeking,
    extraversion_cheerfulness,
    agreeableness_overall,
    agreeableness_trust,
    agreeableness_morality,
    agreeableness_altruism,
    agreeableness_cooperation,
    agreeableness_modesty,
    agreeableness_sympathy,
    neuroticism_overall,
    neuroticism_anxiety,
    neuroticism_anger,
    neuroticism_depression,
    neuroticism_self_consciousness,
    neuroticism_immoderation,
    neuroticism_vulnerability,
});

score_section!(VocationalInterestsAndValues, default = 50, range = 0..=100, {
    riasec_realistic,
    riasec_investigative,
    riasec_artistic,
    riasec_social,
    riasec_enterprising,
    riasec_conventional,
    value_achievement,
    value_independence,
    value_recognition,
    value_relationships,
    value_support,
    value_working_conditions,
});

impl VocationalInterestsAndValues {
    /// RIASEC code letters with their scores, in canonical R-I-A-S-E-C order.
    pub fn riasec_scores(&self) -> [(&'static str, i32); 6] {
        [
            ("Realistic", self.riasec_realistic),
            ("Investigative", self.riasec_investigative),
            ("Artistic", self.riasec_artistic),
            ("Social", self.riasec_social),
            ("Enterprising", self.riasec_enterprising),
            ("Conventional", self.riasec_conventional),
        ]
    }
}

score_section!(UniversalCognitiveAndPhysicalSkills, default = 50, range = 0..=100, {
    cog_critical_thinking,
    cog_active_learning,
    cog_complex_problem_solving,
    cog_spatial_orientation,
    cog_memorization,
    cog_perceptual_speed,
    comm_reading_comprehension,
    comm_active_listening,
    comm_writing,
    comm_speaking,
    inter_persuasion,
    inter_negotiation,
    inter_instruction,
    inter_service_orientation,
    inter_social_perceptiveness,
    phys_manual_dexterity,
    phys_finger_dexterity,
    phys_multilimb_coordination,
    phys_static_strength,
    phys_dynamic_strength,
    phys_stamina,
    sensory_near_vision,
    sensory_far_vision,
    sensory_color_discrimination,
    sensory_hearing_sensitivity,
});

// ─── Domain skills (0–10, evidence-strength ladder, default 0) ──────────────

score_section!(DomainSkillsStemAndIt, default = 0, range = 0..=10, {
    math_statistics,
    math_calculus,
    math_linear_algebra,
    math_discrete_math,
    prog_python,
    prog_javascript_typescript,
    prog_java,
    prog_c_cpp,
    prog_r,
    prog_sql,
    prog_golang,
    prog_rust,
    cs_data_structures_algorithms,
    cs_system_design,
    cs_os_fundamentals,
    cs_networking,
    cs_databases,
    dev_frontend,
    dev_backend,
    dev_mobile,
    dev_cloud_computing,
    dev_devops_cicd,
    dev_mlops,
    data_analysis,
    data_machine_learning,
    data_deep_learning,
    data_nlp,
    data_computer_vision,
    data_engineering,
    data_visualisation,
    eng_electrical,
    eng_mechanical,
    eng_civil,
    eng_chemical,
    eng_biomedical,
    spec_cybersecurity,
    spec_blockchain,
    spec_iot,
    spec_robotics,
    spec_game_dev,
    spec_ar_vr,
});

score_section!(DomainSkillsHealthcareAndSciences, default = 0, range = 0..=10, {
    health_clinical_medicine,
    health_nursing,
    health_pharmacy,
    health_psychology_clinical,
    health_public_health,
    health_nutrition,
    health_physiotherapy,
    health_occupational_therapy,
    health_radiography,
    health_dentistry,
    health_veterinary,
    health_biomedical_research,
});

score_section!(DomainSkillsArtsHumanitiesMedia, default = 0, range = 0..=10, {
    arts_graphic_design,
    arts_ui_ux_design,
    arts_illustration,
    arts_photography,
    arts_videography,
    arts_video_editing,
    arts_music_performance,
    arts_music_production,
    arts_writing_creative,
    arts_writing_journalistic,
    arts_acting,
    arts_dance,
    arts_fashion_design,
    arts_fine_arts,
    arts_animation,
});

score_section!(DomainSkillsTradesManufacturingLogistics, default = 0, range = 0..=10, {
    trades_construction,
    trades_plumbing,
    trades_electrical,
    trades_welding,
    trades_carpentry,
    trades_automotive_mechanics,
    trades_cnc_machining,
    mfg_quality_control,
    mfg_lean_manufacturing,
    mfg_equipment_maintenance,
    mfg_3d_printing,
    log_supply_chain_management,
    log_logistics_coordination,
    log_warehouse_operations,
    log_inventory_management,
    log_safety_compliance,
    log_forklift_operation,
});

score_section!(DomainSkillsLegalEducationSocial, default = 0, range = 0..=10, {
    legal_research,
    legal_contract_law,
    legal_litigation,
    legal_compliance,
    social_social_work,
    social_counseling,
    social_community_development,
    social_non_profit_management,
    social_conflict_resolution,
    edu_teaching,
    edu_curriculum_development,
    edu_special_education,
    edu_early_childhood,
    gov_policy_analysis,
    gov_public_administration,
    gov_diplomacy,
});

score_section!(DomainSkillsBusinessAndServices, default = 0, range = 0..=10, {
    biz_accounting,
    biz_financial_analysis,
    biz_marketing,
    biz_sales,
    biz_project_management,
    biz_entrepreneurship,
    biz_human_resources,
    biz_operations_management,
    biz_customer_service,
});

score_section!(DomainSkillsSustainabilityAndEsg, default = 0, range = 0..=10, {
    esg_environmental_assessment,
    esg_carbon_accounting,
    esg_renewable_energy,
    esg_circular_economy,
    esg_reporting,
    esg_green_building,
    esg_climate_policy,
    esg_biodiversity_conservation,
});

score_section!(DomainSkillsLanguages, default = 0, range = 0..=10, {
    lang_english,
    lang_cantonese,
    lang_mandarin,
    lang_french,
    lang_german,
    lang_spanish,
    lang_portuguese,
    lang_italian,
    lang_japanese,
    lang_korean,
    lang_arabic,
    lang_russian,
    lang_hindi,
    lang_bengali,
    lang_urdu,
    lang_vietnamese,
    lang_thai,
    lang_indonesian,
    lang_malay,
    lang_tagalog,
    lang_dutch,
    lang_swedish,
    lang_norwegian,
    lang_danish,
    lang_finnish,
    lang_polish,
    lang_czech,
    lang_hungarian,
    lang_greek,
    lang_turkish,
    lang_hebrew,
    lang_persian,
    lang_swahili,
    lang_afrikaans,
    lang_punjabi,
    lang_gujarati,
    lang_tamil,
    lang_telugu,
    lang_marathi,
    lang_sinhalese,
});

impl DomainSkillsLanguages {
    /// (language name, proficiency) pairs, nonzero ones are candidates for
    /// the embedding summary.
    pub fn proficiencies(&mut self) -> Vec<(&'static str, i32)> {
        self.fields_mut()
            .into_iter()
            .map(|(name, score)| (name.trim_start_matches("lang_"), *score))
            .collect()
    }
}

// ─── Top-level profile ──────────────────────────────────────────────────────

/// The complete structured extraction output. Stored verbatim as the
/// `rich_profile` JSONB column; JSON keys are part of the wire contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichProfile {
    #[serde(rename = "User_Logistics_Universal")]
    pub user_logistics: UserLogistics,
    #[serde(rename = "Education_and_Vocational_Records")]
    pub education_records: Vec<EducationRecord>,
    #[serde(rename = "Psychometrics_BigFive")]
    pub big_five: PsychometricsBigFive,
    #[serde(rename = "Vocational_Interests_and_Values")]
    pub vocational: VocationalInterestsAndValues,
    #[serde(rename = "Universal_Cognitive_and_Physical_Skills")]
    pub universal_skills: UniversalCognitiveAndPhysicalSkills,
    #[serde(rename = "Domain_Skills_STEM_and_IT")]
    pub stem_it: DomainSkillsStemAndIt,
    #[serde(rename = "Domain_Skills_Healthcare_and_Sciences")]
    pub healthcare: DomainSkillsHealthcareAndSciences,
    #[serde(rename = "Domain_Skills_Arts_Humanities_Media")]
    pub arts_media: DomainSkillsArtsHumanitiesMedia,
    #[serde(rename = "Domain_Skills_Trades_Manufacturing_Logistics")]
    pub trades_logistics: DomainSkillsTradesManufacturingLogistics,
    #[serde(rename = "Domain_Skills_Legal_Education_Social")]
    pub legal_edu_social: DomainSkillsLegalEducationSocial,
    #[serde(rename = "Domain_Skills_Business_and_Services")]
    pub business: DomainSkillsBusinessAndServices,
    #[serde(rename = "Domain_Skills_Sustainability_and_ESG")]
    pub esg: DomainSkillsSustainabilityAndEsg,
    #[serde(rename = "Domain_Skills_Languages")]
    pub languages: DomainSkillsLanguages,
}

impl RichProfile {
    /// All-neutral baseline: 50 across psychometrics, 0 across domain skills,
    /// no education records. The questionnaire adjustment tests build on this.
    pub fn neutral() -> Self {
        Self::default()
    }
}
