//! Deterministic questionnaire → psychometric adjustment tables.
//!
//! Each (question, option) pair maps to a fixed set of (dimension, delta)
//! adjustments applied unconditionally when that option was selected.
//! Adjustments are additive across questions; final values clamp to [0,100].
//! Every touched dimension also counts as explicit evidence for the
//! evidential clamp in `extraction.rs`.

use std::collections::HashSet;

use crate::models::cv::PersonalityAnswers;
use crate::models::profile::RichProfile;

/// The profile dimensions the questionnaire can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustTarget {
    OpennessOverall,
    OpennessImagination,
    OpennessAdventurousness,
    OpennessIntellect,
    ConscientiousnessSelfEfficacy,
    ConscientiousnessOrderliness,
    ConscientiousnessDutifulness,
    ConscientiousnessAchievementStriving,
    ConscientiousnessSelfDiscipline,
    ConscientiousnessCautiousness,
    ExtraversionOverall,
    ExtraversionGregariousness,
    ExtraversionAssertiveness,
    AgreeablenessAltruism,
    AgreeablenessCooperation,
    AgreeablenessModesty,
    NeuroticismAnxiety,
    NeuroticismAnger,
    RiasecInvestigative,
    RiasecArtistic,
    RiasecSocial,
    RiasecEnterprising,
    RiasecConventional,
    ValueAchievement,
    ValueRecognition,
    ValueRelationships,
    ValueWorkingConditions,
    CogCriticalThinking,
}

impl AdjustTarget {
    /// Field name of the dimension, as used in evidence citations and the
    /// serialized profile.
    pub fn dimension_key(&self) -> &'static str {
        match self {
            AdjustTarget::OpennessOverall => "openness_overall",
            AdjustTarget::OpennessImagination => "openness_imagination",
            AdjustTarget::OpennessAdventurousness => "openness_adventurousness",
            AdjustTarget::OpennessIntellect => "openness_intellect",
            AdjustTarget::ConscientiousnessSelfEfficacy => "conscientiousness_self_efficacy",
            AdjustTarget::ConscientiousnessOrderliness => "conscientiousness_orderliness",
            AdjustTarget::ConscientiousnessDutifulness => "conscientiousness_dutifulness",
            AdjustTarget::ConscientiousnessAchievementStriving => {
                "conscientiousness_achievement_striving"
            }
            AdjustTarget::ConscientiousnessSelfDiscipline => "conscientiousness_self_discipline",
            AdjustTarget::ConscientiousnessCautiousness => "conscientiousness_cautiousness",
            AdjustTarget::ExtraversionOverall => "extraversion_overall",
            AdjustTarget::ExtraversionGregariousness => "extraversion_gregariousness",
            AdjustTarget::ExtraversionAssertiveness => "extraversion_assertiveness",
            AdjustTarget::AgreeablenessAltruism => "agreeableness_altruism",
            AdjustTarget::AgreeablenessCooperation => "agreeableness_cooperation",
            AdjustTarget::AgreeablenessModesty => "agreeableness_modesty",
            AdjustTarget::NeuroticismAnxiety => "neuroticism_anxiety",
            AdjustTarget::NeuroticismAnger => "neuroticism_anger",
            AdjustTarget::RiasecInvestigative => "riasec_investigative",
            AdjustTarget::RiasecArtistic => "riasec_artistic",
            AdjustTarget::RiasecSocial => "riasec_social",
            AdjustTarget::RiasecEnterprising => "riasec_enterprising",
            AdjustTarget::RiasecConventional => "riasec_conventional",
            AdjustTarget::ValueAchievement => "value_achievement",
            AdjustTarget::ValueRecognition => "value_recognition",
            AdjustTarget::ValueRelationships => "value_relationships",
            AdjustTarget::ValueWorkingConditions => "value_working_conditions",
            AdjustTarget::CogCriticalThinking => "cog_critical_thinking",
        }
    }

    /// Adds `delta` to the target dimension, clamped to [0,100].
    pub fn apply(&self, profile: &mut RichProfile, delta: i32) {
        let field = match self {
            AdjustTarget::OpennessOverall => &mut profile.big_five.openness_overall,
            AdjustTarget::OpennessImagination => &mut profile.big_five.openness_imagination,
            AdjustTarget::OpennessAdventurousness => {
                &mut profile.big_five.openness_adventurousness
            }
            AdjustTarget::OpennessIntellect => &mut profile.big_five.openness_intellect,
            AdjustTarget::ConscientiousnessSelfEfficacy => {
                &mut profile.big_five.conscientiousness_self_efficacy
            }
            AdjustTarget::ConscientiousnessOrderliness => {
                &mut profile.big_five.conscientiousness_orderliness
            }
            AdjustTarget::ConscientiousnessDutifulness => {
                &mut profile.big_five.conscientiousness_dutifulness
            }
            AdjustTarget::ConscientiousnessAchievementStriving => {
                &mut profile.big_five.conscientiousness_achievement_striving
            }
            AdjustTarget::ConscientiousnessSelfDiscipline => {
                &mut profile.big_five.conscientiousness_self_discipline
            }
            AdjustTarget::ConscientiousnessCautiousness => {
                &mut profile.big_five.conscientiousness_cautiousness
            }
            AdjustTarget::ExtraversionOverall => &mut profile.big_five.extraversion_overall,
            AdjustTarget::ExtraversionGregariousness => {
                &mut profile.big_five.extraversion_gregariousness
            }
            AdjustTarget::ExtraversionAssertiveness => {
                &mut profile.big_five.extraversion_assertiveness
            }
            AdjustTarget::AgreeablenessAltruism => &mut profile.big_five.agreeableness_altruism,
            AdjustTarget::AgreeablenessCooperation => {
                &mut profile.big_five.agreeableness_cooperation
            }
            AdjustTarget::AgreeablenessModesty => &mut profile.big_five.agreeableness_modesty,
            AdjustTarget::NeuroticismAnxiety => &mut profile.big_five.neuroticism_anxiety,
            AdjustTarget::NeuroticismAnger => &mut profile.big_five.neuroticism_anger,
            AdjustTarget::RiasecInvestigative => &mut profile.vocational.riasec_investigative,
            AdjustTarget::RiasecArtistic => &mut profile.vocational.riasec_artistic,
            AdjustTarget::RiasecSocial => &mut profile.vocational.riasec_social,
            AdjustTarget::RiasecEnterprising => &mut profile.vocational.riasec_enterprising,
            AdjustTarget::RiasecConventional => &mut profile.vocational.riasec_conventional,
            AdjustTarget::ValueAchievement => &mut profile.vocational.value_achievement,
            AdjustTarget::ValueRecognition => &mut profile.vocational.value_recognition,
            AdjustTarget::ValueRelationships => &mut profile.vocational.value_relationships,
            AdjustTarget::ValueWorkingConditions => {
                &mut profile.vocational.value_working_conditions
            }
            AdjustTarget::CogCriticalThinking => {
                &mut profile.universal_skills.cog_critical_thinking
            }
        };
        *field = (*field + delta).clamp(0, 100);
    }
}

use AdjustTarget::*;

/// The fixed lookup: every option of every question maps to its adjustment
/// set. Unknown questions or options map to nothing.
pub fn adjustments_for(question: &str, option: &str) -> &'static [(AdjustTarget, i32)] {
    match (question, option) {
        // Q1 — free month
        ("q1", "travel_solo") => &[(OpennessAdventurousness, 10), (ConscientiousnessOrderliness, -5)],
        ("q1", "build_project") => &[(ConscientiousnessAchievementStriving, 10), (OpennessIntellect, 5)],
        ("q1", "volunteer") => &[(AgreeablenessAltruism, 10), (ExtraversionOverall, -5)],
        ("q1", "intensive_course") => &[(ConscientiousnessSelfDiscipline, 10), (OpennessIntellect, 5)],
        // Q2 — credit stolen
        ("q2", "address_privately") => &[(AgreeablenessCooperation, 5), (NeuroticismAnger, -10)],
        ("q2", "bring_up_meeting") => &[(ExtraversionAssertiveness, 10)],
        ("q2", "let_it_go") => &[(AgreeablenessModesty, 10), (NeuroticismAnger, -15)],
        ("q2", "escalate_manager") => &[(ConscientiousnessDutifulness, 5), (ExtraversionAssertiveness, 5)],
        // Q3 — job offers
        ("q3", "safe") => &[(ConscientiousnessCautiousness, 10), (OpennessAdventurousness, -5), (RiasecConventional, 5)],
        ("q3", "risky") => &[(OpennessAdventurousness, 10), (NeuroticismAnxiety, -10), (RiasecEnterprising, 5)],
        ("q3", "negotiate") => &[(ExtraversionAssertiveness, 10), (ConscientiousnessSelfEfficacy, 5)],
        ("q3", "more_time") => &[(ConscientiousnessCautiousness, 5), (NeuroticismAnxiety, 5)],
        // Q4 — work environment
        ("q4", "collaborative") => &[(ExtraversionGregariousness, 10), (AgreeablenessCooperation, 10)],
        ("q4", "independent") => &[(ConscientiousnessSelfDiscipline, 10), (ExtraversionOverall, -5)],
        ("q4", "startup") => &[(OpennessAdventurousness, 10), (RiasecEnterprising, 10)],
        ("q4", "large_org") => &[(ConscientiousnessOrderliness, 5), (RiasecConventional, 10)],
        // Q5 — problem solving
        ("q5", "analytical") => &[(CogCriticalThinking, 10), (OpennessIntellect, 5), (RiasecInvestigative, 10)],
        ("q5", "creative") => &[(OpennessImagination, 10), (RiasecArtistic, 5)],
        ("q5", "collaborative_problem") => &[(AgreeablenessCooperation, 10), (ExtraversionGregariousness, 5)],
        ("q5", "framework") => &[(ConscientiousnessOrderliness, 10), (RiasecConventional, 5)],
        // Q6 — career driver
        ("q6", "financial") => &[(ValueWorkingConditions, 10), (RiasecEnterprising, 5)],
        ("q6", "social_impact") => &[(AgreeablenessAltruism, 10), (ValueRelationships, 10), (RiasecSocial, 10)],
        ("q6", "innovation") => &[(OpennessOverall, 10), (RiasecInvestigative, 5), (ValueAchievement, 5)],
        ("q6", "expertise") => &[(ConscientiousnessAchievementStriving, 10), (OpennessIntellect, 10), (ValueRecognition, 5)],
        _ => &[],
    }
}

/// Applies every answered question's adjustment set to the profile and
/// returns the dimensions touched, which double as evidence citations for
/// the evidential clamp. Iterates the fixed question order so the result is
/// independent of the answer map's iteration order.
pub fn apply_questionnaire(
    profile: &mut RichProfile,
    answers: &PersonalityAnswers,
) -> HashSet<&'static str> {
    let mut touched = HashSet::new();
    for question in super::questions::PERSONALITY_QUESTIONS {
        let Some(option) = answers.get(question.id) else {
            continue;
        };
        for (target, delta) in adjustments_for(question.id, option) {
            target.apply(profile, *delta);
            touched.insert(target.dimension_key());
        }
    }
    touched
}
