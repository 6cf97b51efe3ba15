//! Matching & Scoring Engine.
//!
//! Two-stage search: a cheap vector retrieval over the whole catalog narrows
//! to [`RETRIEVAL_K`] candidates, then one generative fit assessment per pair
//! runs over the top [`RERANK_N`] with the full profile and opportunity in
//! context. The bound exists to cap the expensive stage, and tests pin it.
//!
//! Per-pair failures are dropped, not escalated: every surviving pair is
//! worth persisting on its own. The whole run fails only when retrieval
//! fails, the candidate has no usable embedding, or no pair survives.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::llm_client::{decode_structured, GenerationError, StructuredGenerator};
use crate::matching::prompts::{FIT_PROMPT_TEMPLATE, FIT_SYSTEM};
use crate::models::candidate::StoredProfile;
use crate::models::opportunity::Opportunity;
use crate::models::recommendation::{NewRecommendation, RecommendationWithOpportunity};
use crate::opportunities::store::OpportunityStore;
use crate::recommendations::store::RecommendationStore;

/// Retrieval-stage fan-out.
pub const RETRIEVAL_K: i64 = 20;
/// Re-rank fan-out; never more than this many generative calls per run.
pub const RERANK_N: usize = 10;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("candidate has no stored profile")]
    NoProfile,

    #[error("candidate profile has no embedding")]
    MissingEmbedding,

    #[error("retrieval stage failed: {0}")]
    Retrieval(String),

    #[error("all {attempted} re-rank calls failed")]
    AllPairsFailed { attempted: usize },

    #[error("recommendation store failed: {0}")]
    Store(String),
}

/// Structured output of one per-pair scoring call.
#[derive(Debug, Clone, Deserialize)]
pub struct FitAssessment {
    pub fit_score: i32,
    pub fit_explanation: String,
    pub gaps: String,
    pub actions: Vec<String>,
}

/// Runs the full matching pipeline for one candidate and returns the
/// persisted recommendations, fit score descending.
pub async fn run_matching(
    profile: &StoredProfile,
    opportunities: &dyn OpportunityStore,
    recommendations: &dyn RecommendationStore,
    generator: Arc<dyn StructuredGenerator>,
) -> Result<Vec<RecommendationWithOpportunity>, MatchingError> {
    if profile.embedding.is_empty() {
        return Err(MatchingError::MissingEmbedding);
    }

    let retrieved = opportunities
        .nearest_neighbors(&profile.embedding, RETRIEVAL_K)
        .await
        .map_err(|e| MatchingError::Retrieval(e.to_string()))?;

    let shortlist: Vec<Opportunity> = retrieved
        .into_iter()
        .take(RERANK_N)
        .map(|r| r.opportunity)
        .collect();
    let attempted = shortlist.len();

    let profile_context = build_profile_context(profile);

    // Per-pair calls are independent; completion order is irrelevant because
    // the read path below re-sorts on the persisted fit score. Dropping this
    // JoinSet (request timeout) aborts the in-flight calls for this run only.
    let mut calls: JoinSet<(Opportunity, Result<FitAssessment, GenerationError>)> = JoinSet::new();
    for opportunity in shortlist {
        let generator = Arc::clone(&generator);
        let prompt = build_fit_prompt(&profile_context, &opportunity);
        calls.spawn(async move {
            let result = score_pair(generator.as_ref(), &prompt).await;
            (opportunity, result)
        });
    }

    let mut scored: Vec<(Opportunity, FitAssessment)> = Vec::new();
    while let Some(joined) = calls.join_next().await {
        match joined {
            Ok((opportunity, Ok(fit))) => scored.push((opportunity, fit)),
            Ok((opportunity, Err(e))) => {
                warn!(opportunity_id = %opportunity.id, "re-rank call failed, dropping pair: {e}");
            }
            Err(e) => warn!("re-rank task aborted: {e}"),
        }
    }

    if scored.is_empty() && attempted > 0 {
        return Err(MatchingError::AllPairsFailed { attempted });
    }

    let mut persisted = 0usize;
    for (opportunity, fit) in &scored {
        let rec = NewRecommendation {
            user_id: profile.user_id,
            opportunity_id: opportunity.id,
            fit_score: fit.fit_score.clamp(0, 100),
            fit_explanation: fit.fit_explanation.clone(),
            gaps: fit.gaps.clone(),
            actions: fit.actions.clone(),
        };
        match recommendations.upsert(&rec).await {
            Ok(()) => persisted += 1,
            Err(e) => {
                warn!(opportunity_id = %opportunity.id, "failed to persist recommendation: {e}");
            }
        }
    }

    info!(
        user_id = %profile.user_id,
        attempted, scored = scored.len(), persisted,
        "matching run complete"
    );

    recommendations
        .list_by_candidate(profile.user_id, RERANK_N as i64)
        .await
        .map_err(|e| MatchingError::Store(e.to_string()))
}

async fn score_pair(
    generator: &dyn StructuredGenerator,
    prompt: &str,
) -> Result<FitAssessment, GenerationError> {
    let value = generator.generate_json(FIT_SYSTEM, prompt).await?;
    decode_structured(value)
}

/// Full candidate context for re-ranking: the structured profile, not the
/// embedding. Vectors got us the shortlist; scoring sees everything.
fn build_profile_context(profile: &StoredProfile) -> String {
    format!(
        "CV: {}\nProfile: {}\nInterests: {}",
        serde_json::to_string(&profile.cv_data).unwrap_or_default(),
        serde_json::to_string(&profile.rich_profile).unwrap_or_default(),
        serde_json::to_string(&profile.interests).unwrap_or_default(),
    )
}

fn build_fit_prompt(profile_context: &str, opportunity: &Opportunity) -> String {
    FIT_PROMPT_TEMPLATE
        .replace("{profile_context}", profile_context)
        .replace("{title}", &opportunity.title)
        .replace("{org}", &opportunity.org)
        .replace("{description}", &opportunity.description)
        .replace("{requirements}", &opportunity.requirements.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::errors::AppError;
    use crate::models::cv::{CvData, Interests};
    use crate::models::opportunity::{Industry, OpportunityType, RetrievedOpportunity};
    use crate::models::profile::RichProfile;
    use crate::models::recommendation::RecommendationRow;

    fn opportunity(title: &str) -> Opportunity {
        Opportunity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            org: "Acme".to_string(),
            opportunity_type: "internship".to_string(),
            industry: "technology".to_string(),
            location: "remote".to_string(),
            description: format!("{title} description"),
            requirements: vec!["curiosity".to_string()],
            is_paid: true,
            url: None,
            deadline: None,
        }
    }

    fn profile() -> StoredProfile {
        StoredProfile {
            user_id: Uuid::new_v4(),
            cv_data: CvData {
                name: "Jane Doe".to_string(),
                email: None,
                education: vec![],
                skills: vec!["Python".to_string()],
                experience: vec![],
                languages: vec![],
                certifications: vec![],
            },
            rich_profile: RichProfile::neutral(),
            interests: Interests::default(),
            embedding: vec![0.1; 8],
            updated_at: Utc::now(),
        }
    }

    /// Fixed-catalog store that records the requested k.
    struct FixtureOpportunities {
        catalog: Vec<Opportunity>,
        requested_k: Mutex<Vec<i64>>,
        fail: bool,
    }

    impl FixtureOpportunities {
        fn new(catalog: Vec<Opportunity>) -> Self {
            Self {
                catalog,
                requested_k: Mutex::new(vec![]),
                fail: false,
            }
        }
    }

    #[async_trait]
    impl OpportunityStore for FixtureOpportunities {
        async fn nearest_neighbors(
            &self,
            _embedding: &[f32],
            k: i64,
        ) -> Result<Vec<RetrievedOpportunity>, AppError> {
            if self.fail {
                return Err(AppError::Validation("index offline".to_string()));
            }
            self.requested_k.lock().unwrap().push(k);
            Ok(self
                .catalog
                .iter()
                .take(k as usize)
                .enumerate()
                .map(|(i, o)| RetrievedOpportunity {
                    opportunity: o.clone(),
                    distance: i as f64 * 0.01,
                })
                .collect())
        }

        async fn search(
            &self,
            _query: &str,
            _opportunity_type: Option<OpportunityType>,
            _industry: Option<Industry>,
        ) -> Result<Vec<Opportunity>, AppError> {
            unimplemented!("not used by the engine")
        }
    }

    /// In-memory recommendation store with the same uniqueness and ordering
    /// semantics as the Postgres implementation.
    struct MemoryRecommendations {
        catalog: HashMap<Uuid, Opportunity>,
        rows: Mutex<HashMap<(Uuid, Uuid), NewRecommendation>>,
        upserts: AtomicUsize,
    }

    impl MemoryRecommendations {
        fn new(catalog: &[Opportunity]) -> Self {
            Self {
                catalog: catalog.iter().map(|o| (o.id, o.clone())).collect(),
                rows: Mutex::new(HashMap::new()),
                upserts: AtomicUsize::new(0),
            }
        }

        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RecommendationStore for MemoryRecommendations {
        async fn upsert(&self, rec: &NewRecommendation) -> Result<(), AppError> {
            self.upserts.fetch_add(1, Ordering::SeqCst);
            self.rows
                .lock()
                .unwrap()
                .insert((rec.user_id, rec.opportunity_id), rec.clone());
            Ok(())
        }

        async fn list_by_candidate(
            &self,
            user_id: Uuid,
            limit: i64,
        ) -> Result<Vec<RecommendationWithOpportunity>, AppError> {
            let rows = self.rows.lock().unwrap();
            let mut list: Vec<&NewRecommendation> = rows
                .values()
                .filter(|r| r.user_id == user_id)
                .collect();
            list.sort_by(|a, b| {
                b.fit_score
                    .cmp(&a.fit_score)
                    .then(a.opportunity_id.cmp(&b.opportunity_id))
            });
            Ok(list
                .into_iter()
                .take(limit as usize)
                .map(|r| RecommendationWithOpportunity {
                    recommendation: RecommendationRow {
                        id: Uuid::new_v4(),
                        user_id: r.user_id,
                        opportunity_id: r.opportunity_id,
                        fit_score: r.fit_score,
                        fit_explanation: r.fit_explanation.clone(),
                        gaps: r.gaps.clone(),
                        actions: r.actions.clone(),
                        created_at: Utc::now(),
                    },
                    opportunity: self.catalog[&r.opportunity_id].clone(),
                })
                .collect())
        }

        async fn find_by_opportunity_title(
            &self,
            _user_id: Uuid,
            _title_query: &str,
        ) -> Result<Option<RecommendationWithOpportunity>, AppError> {
            unimplemented!("not used by the engine")
        }
    }

    /// Scorer double: looks up the opportunity title inside the prompt and
    /// answers with that title's canned score, or fails the call.
    struct ScriptedScorer {
        scores: HashMap<String, Option<i32>>,
        calls: AtomicUsize,
    }

    impl ScriptedScorer {
        fn new(scores: &[(&str, Option<i32>)]) -> Self {
            Self {
                scores: scores
                    .iter()
                    .map(|(t, s)| (t.to_string(), *s))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl StructuredGenerator for ScriptedScorer {
        async fn generate_json(&self, _system: &str, user: &str) -> Result<Value, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let score = self
                .scores
                .iter()
                .find(|(title, _)| user.contains(title.as_str()))
                .map(|(_, score)| *score)
                .unwrap_or(Some(50));
            match score {
                Some(score) => Ok(json!({
                    "fit_score": score,
                    "fit_explanation": "Solid overlap between profile and role.",
                    "gaps": "Limited direct experience.",
                    "actions": ["Take a relevant course", "Build a portfolio project"]
                })),
                None => Err(GenerationError::EmptyContent),
            }
        }
    }

    #[tokio::test]
    async fn test_rerank_is_bounded_even_when_retrieval_is_full() {
        let catalog: Vec<Opportunity> =
            (0..25).map(|i| opportunity(&format!("role-{i:02}"))).collect();
        let opportunities = FixtureOpportunities::new(catalog.clone());
        let recommendations = MemoryRecommendations::new(&catalog);
        let scorer = Arc::new(ScriptedScorer::new(&[]));

        run_matching(&profile(), &opportunities, &recommendations, scorer.clone())
            .await
            .unwrap();

        // Retrieval asked for exactly K, re-rank made exactly N calls.
        assert_eq!(*opportunities.requested_k.lock().unwrap(), vec![RETRIEVAL_K]);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), RERANK_N);
        assert_eq!(recommendations.row_count(), RERANK_N);
    }

    #[tokio::test]
    async fn test_partial_failures_do_not_abort_the_batch() {
        let catalog: Vec<Opportunity> =
            (0..10).map(|i| opportunity(&format!("role-{i:02}"))).collect();
        let opportunities = FixtureOpportunities::new(catalog.clone());
        let recommendations = MemoryRecommendations::new(&catalog);
        let scorer = Arc::new(ScriptedScorer::new(&[
            ("role-01", None),
            ("role-04", None),
            ("role-07", None),
        ]));

        let result = run_matching(&profile(), &opportunities, &recommendations, scorer)
            .await
            .unwrap();

        assert_eq!(recommendations.row_count(), 7);
        assert_eq!(result.len(), 7);
        assert!(!result
            .iter()
            .any(|r| r.opportunity.title == "role-01" || r.opportunity.title == "role-04"));
    }

    #[tokio::test]
    async fn test_all_pairs_failing_is_a_matching_error() {
        let catalog = vec![opportunity("role-a"), opportunity("role-b")];
        let opportunities = FixtureOpportunities::new(catalog.clone());
        let recommendations = MemoryRecommendations::new(&catalog);
        let scorer = Arc::new(ScriptedScorer::new(&[
            ("role-a", None),
            ("role-b", None),
        ]));

        let err = run_matching(&profile(), &opportunities, &recommendations, scorer)
            .await
            .unwrap_err();
        assert!(matches!(err, MatchingError::AllPairsFailed { attempted: 2 }));
        assert_eq!(recommendations.row_count(), 0);
    }

    #[tokio::test]
    async fn test_rematching_replaces_rows_instead_of_appending() {
        let catalog: Vec<Opportunity> =
            (0..5).map(|i| opportunity(&format!("role-{i:02}"))).collect();
        let opportunities = FixtureOpportunities::new(catalog.clone());
        let recommendations = MemoryRecommendations::new(&catalog);
        let scorer = Arc::new(ScriptedScorer::new(&[]));
        let candidate = profile();

        let first = run_matching(&candidate, &opportunities, &recommendations, scorer.clone())
            .await
            .unwrap();
        let second = run_matching(&candidate, &opportunities, &recommendations, scorer)
            .await
            .unwrap();

        assert_eq!(recommendations.row_count(), 5);
        assert_eq!(first.len(), second.len());
        let pairs = |rows: &[RecommendationWithOpportunity]| -> Vec<(Uuid, i32)> {
            rows.iter()
                .map(|r| (r.recommendation.opportunity_id, r.recommendation.fit_score))
                .collect()
        };
        assert_eq!(pairs(&first), pairs(&second));
    }

    #[tokio::test]
    async fn test_results_ordered_by_descending_fit() {
        let catalog = vec![
            opportunity("backend-internship"),
            opportunity("data-fellowship"),
            opportunity("ngo-volunteer"),
        ];
        let opportunities = FixtureOpportunities::new(catalog.clone());
        let recommendations = MemoryRecommendations::new(&catalog);
        let scorer = Arc::new(ScriptedScorer::new(&[
            ("backend-internship", Some(55)),
            ("data-fellowship", Some(91)),
            ("ngo-volunteer", Some(73)),
        ]));

        let result = run_matching(&profile(), &opportunities, &recommendations, scorer)
            .await
            .unwrap();

        let scores: Vec<i32> = result.iter().map(|r| r.recommendation.fit_score).collect();
        assert_eq!(scores, vec![91, 73, 55]);
        assert!(scores.iter().all(|s| (0..=100).contains(s)));
    }

    #[tokio::test]
    async fn test_empty_retrieval_returns_empty_without_error() {
        let opportunities = FixtureOpportunities::new(vec![]);
        let recommendations = MemoryRecommendations::new(&[]);
        let scorer = Arc::new(ScriptedScorer::new(&[]));

        let result = run_matching(&profile(), &opportunities, &recommendations, scorer.clone())
            .await
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_embedding_fails_before_retrieval() {
        let opportunities = FixtureOpportunities::new(vec![opportunity("role")]);
        let recommendations = MemoryRecommendations::new(&[]);
        let scorer = Arc::new(ScriptedScorer::new(&[]));
        let mut candidate = profile();
        candidate.embedding = vec![];

        let err = run_matching(&candidate, &opportunities, &recommendations, scorer)
            .await
            .unwrap_err();
        assert!(matches!(err, MatchingError::MissingEmbedding));
        assert!(opportunities.requested_k.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_retrieval_failure_aborts_the_whole_run() {
        let mut opportunities = FixtureOpportunities::new(vec![opportunity("role")]);
        opportunities.fail = true;
        let recommendations = MemoryRecommendations::new(&[]);
        let scorer = Arc::new(ScriptedScorer::new(&[]));

        let err = run_matching(&profile(), &opportunities, &recommendations, scorer.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, MatchingError::Retrieval(_)));
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fit_scores_outside_range_are_clamped_on_persist() {
        let catalog = vec![opportunity("overshoot")];
        let opportunities = FixtureOpportunities::new(catalog.clone());
        let recommendations = MemoryRecommendations::new(&catalog);
        let scorer = Arc::new(ScriptedScorer::new(&[("overshoot", Some(140))]));

        let result = run_matching(&profile(), &opportunities, &recommendations, scorer)
            .await
            .unwrap();
        assert_eq!(result[0].recommendation.fit_score, 100);
    }

    #[test]
    fn test_fit_prompt_carries_full_opportunity_detail() {
        let opp = opportunity("Graduate Analyst");
        let prompt = build_fit_prompt("CV: {}", &opp);
        assert!(prompt.contains("Title: Graduate Analyst"));
        assert!(prompt.contains("Organisation: Acme"));
        assert!(prompt.contains("Requirements: curiosity"));
    }
}
