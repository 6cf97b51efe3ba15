#![allow(dead_code)]

//! The fixed, versioned onboarding question set.
//!
//! The adjustment tables in `adjustments.rs` are keyed to these exact ids and
//! option values; changing either side without the other breaks extraction
//! determinism, so both live next to each other in this module tree.

pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct PersonalityQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [QuestionOption],
}

pub static PERSONALITY_QUESTIONS: &[PersonalityQuestion] = &[
    PersonalityQuestion {
        id: "q1",
        question: "You're given a free month — what do you do?",
        options: &[
            QuestionOption {
                value: "travel_solo",
                label: "Travel solo and explore new cultures",
            },
            QuestionOption {
                value: "build_project",
                label: "Build a side project or startup idea",
            },
            QuestionOption {
                value: "volunteer",
                label: "Volunteer for a cause I care about",
            },
            QuestionOption {
                value: "intensive_course",
                label: "Take an intensive course or certification",
            },
        ],
    },
    PersonalityQuestion {
        id: "q2",
        question: "A colleague gets credit for your idea. What do you do?",
        options: &[
            QuestionOption {
                value: "address_privately",
                label: "Calmly address it privately with them",
            },
            QuestionOption {
                value: "bring_up_meeting",
                label: "Bring it up in the next team meeting",
            },
            QuestionOption {
                value: "let_it_go",
                label: "Let it go — outcomes matter more than credit",
            },
            QuestionOption {
                value: "escalate_manager",
                label: "Discuss it with my manager",
            },
        ],
    },
    PersonalityQuestion {
        id: "q3",
        question: "You have two job offers: one safe, one risky but exciting. You choose:",
        options: &[
            QuestionOption {
                value: "safe",
                label: "The safe offer — stability enables long-term growth",
            },
            QuestionOption {
                value: "risky",
                label: "The risky offer — high risk, high reward",
            },
            QuestionOption {
                value: "negotiate",
                label: "Negotiate to make the safe offer more exciting",
            },
            QuestionOption {
                value: "more_time",
                label: "Ask for more time to decide",
            },
        ],
    },
    PersonalityQuestion {
        id: "q4",
        question: "Your ideal work environment is:",
        options: &[
            QuestionOption {
                value: "collaborative",
                label: "Collaborative team with constant interaction",
            },
            QuestionOption {
                value: "independent",
                label: "Independent deep work with clear goals",
            },
            QuestionOption {
                value: "startup",
                label: "Small startup with broad responsibilities",
            },
            QuestionOption {
                value: "large_org",
                label: "Large organisation with structured career path",
            },
        ],
    },
    PersonalityQuestion {
        id: "q5",
        question: "When solving a difficult problem, you typically:",
        options: &[
            QuestionOption {
                value: "analytical",
                label: "Analyse data and map out all possibilities",
            },
            QuestionOption {
                value: "creative",
                label: "Brainstorm creative solutions quickly",
            },
            QuestionOption {
                value: "collaborative_problem",
                label: "Talk it through with others to get perspectives",
            },
            QuestionOption {
                value: "framework",
                label: "Follow a proven framework or methodology",
            },
        ],
    },
    PersonalityQuestion {
        id: "q6",
        question: "What drives you most in your career?",
        options: &[
            QuestionOption {
                value: "financial",
                label: "Financial security and upward mobility",
            },
            QuestionOption {
                value: "social_impact",
                label: "Making a positive social or environmental impact",
            },
            QuestionOption {
                value: "innovation",
                label: "Building innovative products or solutions",
            },
            QuestionOption {
                value: "expertise",
                label: "Becoming a recognised expert in my field",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_questions_four_options_each() {
        assert_eq!(PERSONALITY_QUESTIONS.len(), 6);
        for q in PERSONALITY_QUESTIONS {
            assert_eq!(q.options.len(), 4, "question {} has wrong arity", q.id);
        }
    }

    #[test]
    fn test_option_values_are_unique_within_each_question() {
        for q in PERSONALITY_QUESTIONS {
            let mut values: Vec<&str> = q.options.iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), 4, "duplicate option value in {}", q.id);
        }
    }
}
