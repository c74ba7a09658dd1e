//! Matcher — scores one job posting against a candidate profile and search
//! criteria, and renders the prompt for a downstream model review.
//!
//! Five independent checks feed a fixed-weight sum (see `weights`):
//! skill overlap, must-have presence, deal-breakers, salary floor, and years
//! of experience. The loaded documents are never mutated, so a `Matcher` can
//! be shared across threads and called repeatedly.

pub mod deal_breakers;
pub mod experience;
pub mod must_haves;
pub mod prompts;
pub mod salary;
pub mod skills;
pub mod weights;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::errors::MatcherError;
use crate::models::{CandidateProfile, JobPosting, SearchCriteria};

pub use deal_breakers::DealBreakerResult;
pub use experience::ExperienceMatch;
pub use must_haves::MustHaveResult;
pub use salary::SalaryMatch;
pub use weights::{Weights, APPLY_THRESHOLD, MATCH_WEIGHTS, MAYBE_THRESHOLD};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Apply,
    Maybe,
    Skip,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Recommendation::Apply => "apply",
            Recommendation::Maybe => "maybe",
            Recommendation::Skip => "skip",
        })
    }
}

/// Per-check breakdown behind a `MatchResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    /// Rounded skill overlap percentage.
    pub skill_match: u32,
    pub must_haves: MustHaveResult,
    pub deal_breakers: DealBreakerResult,
    pub salary_match: SalaryMatch,
    pub experience_match: ExperienceMatch,
}

/// Verdict for one job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub recommendation: Recommendation,
    pub details: MatchDetails,
}

/// Candidate summary rendered into the analysis prompt.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateSummary<'a> {
    skills: Vec<&'a str>,
    #[serde(skip_serializing_if = "is_null")]
    experience: &'a Value,
    years_of_experience: u32,
    #[serde(skip_serializing_if = "is_null")]
    career_goals: &'a Value,
}

fn is_null(value: &&Value) -> bool {
    value.is_null()
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Matcher {
    profile: CandidateProfile,
    criteria: SearchCriteria,
    /// Criteria as written, rendered verbatim into the analysis prompt.
    criteria_document: Value,
    candidate_skills: HashSet<String>,
}

impl Matcher {
    pub fn new(profile: CandidateProfile, criteria: SearchCriteria) -> Self {
        let criteria_document =
            serde_json::to_value(&criteria).unwrap_or_else(|_| Value::Object(Map::new()));
        Self::with_criteria_document(profile, criteria, criteria_document)
    }

    /// Builds from raw JSON documents. A document whose shape can't be read
    /// is logged and replaced by an empty one; the criteria document is still
    /// kept as given for the prompt.
    pub fn from_documents(profile: Value, criteria: Value) -> Self {
        let typed_profile = parse_or_default::<CandidateProfile>(profile, "resume");
        let typed_criteria = parse_or_default::<SearchCriteria>(criteria.clone(), "search criteria");
        Self::with_criteria_document(typed_profile, typed_criteria, criteria)
    }

    /// Loads both documents from disk. A file that cannot be read or parsed is
    /// logged and replaced by an empty document, so construction never fails;
    /// matching then runs with little or no signal from that side.
    pub fn load(resume_path: impl AsRef<Path>, criteria_path: impl AsRef<Path>) -> Self {
        let profile = load_or_empty(resume_path.as_ref());
        let criteria = load_or_empty(criteria_path.as_ref());
        Self::from_documents(profile, criteria)
    }

    fn with_criteria_document(
        profile: CandidateProfile,
        criteria: SearchCriteria,
        criteria_document: Value,
    ) -> Self {
        let candidate_skills = profile.skill_set();
        Self {
            profile,
            criteria,
            criteria_document,
            candidate_skills,
        }
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn criteria_document(&self) -> &Value {
        &self.criteria_document
    }

    /// Percentage of `required` skills covered by the candidate.
    pub fn skill_match(&self, required: &[String]) -> f64 {
        skills::skill_match(&self.candidate_skills, required)
    }

    pub fn must_have_check(&self, description: &str) -> MustHaveResult {
        must_haves::check_must_haves(&self.criteria.must_have_skills, description)
    }

    pub fn deal_breaker_check(&self, description: &str, job: &JobPosting) -> DealBreakerResult {
        deal_breakers::check_deal_breakers(
            &self.criteria.deal_breakers,
            self.criteria.preferences.remote,
            description,
            job,
        )
    }

    pub fn salary_check(&self, salary: Option<&str>) -> SalaryMatch {
        salary::check_salary(salary, self.criteria.salary_range.minimum)
    }

    pub fn experience_check(&self, description: &str) -> ExperienceMatch {
        experience::check_experience(description, self.profile.personal.years_of_experience)
    }

    /// Runs every check and combines them into a score and recommendation.
    pub fn match_job(&self, job: &JobPosting) -> MatchResult {
        let skill_match = self.skill_match(job.required_skills.as_deref().unwrap_or_default());
        let must_haves = self.must_have_check(&job.description);
        let deal_breakers = self.deal_breaker_check(&job.description, job);
        let salary_match = self.salary_check(job.salary.as_deref());
        let experience_match = self.experience_check(&job.description);

        debug!(
            title = %job.title,
            skill_match,
            must_haves_passed = must_haves.passed,
            must_haves_matched = must_haves.matched_count,
            deal_breakers = ?deal_breakers.deal_breakers,
            salary_score = salary_match.score,
            experience_score = experience_match.score,
            "job checks complete"
        );

        let w = &MATCH_WEIGHTS;
        let deal_breaker_score = if deal_breakers.has_deal_breakers { 0.0 } else { 100.0 };
        let raw_score = skill_match * w.skills
            + must_haves.score() * w.must_haves
            + salary_match.score * w.salary
            + experience_match.score * w.experience
            + deal_breaker_score * w.deal_breakers;

        let recommendation = recommend(raw_score, deal_breakers.has_deal_breakers);
        let score = raw_score.round().clamp(0.0, 100.0) as u32;

        info!(
            title = %job.title,
            company = %job.company,
            score,
            %recommendation,
            "job matched"
        );

        MatchResult {
            score,
            recommendation,
            details: MatchDetails {
                skill_match: skill_match.round() as u32,
                must_haves,
                deal_breakers,
                salary_match,
                experience_match,
            },
        }
    }

    /// Renders the analysis prompt for a downstream language model.
    pub fn generate_prompt(&self, job: &JobPosting) -> Result<String, MatcherError> {
        let summary = CandidateSummary {
            skills: self.profile.all_skills(),
            experience: &self.profile.experience,
            years_of_experience: self.profile.personal.years_of_experience,
            career_goals: &self.profile.career_goals,
        };
        let candidate_json = serde_json::to_string_pretty(&summary)?;
        let criteria_json = serde_json::to_string_pretty(&self.criteria_document)?;

        Ok(prompts::fill_template(
            prompts::JOB_ANALYSIS_PROMPT_TEMPLATE,
            &[
                ("candidate_json", &candidate_json),
                ("criteria_json", &criteria_json),
                ("title", &job.title),
                ("company", &job.company),
                ("location", &job.location),
                (
                    "salary",
                    job.salary
                        .as_deref()
                        .filter(|s| !s.is_empty())
                        .unwrap_or(prompts::SALARY_NOT_SPECIFIED),
                ),
                ("description", &job.description),
            ],
        ))
    }
}

/// Any deal-breaker rules out both "apply" and "maybe"; the score itself is
/// left as computed.
fn recommend(score: f64, has_deal_breakers: bool) -> Recommendation {
    if has_deal_breakers {
        Recommendation::Skip
    } else if score >= APPLY_THRESHOLD {
        Recommendation::Apply
    } else if score >= MAYBE_THRESHOLD {
        Recommendation::Maybe
    } else {
        Recommendation::Skip
    }
}

/// Reads and parses one JSON document.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, MatcherError> {
    let data = std::fs::read_to_string(path).map_err(|source| MatcherError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| MatcherError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn load_or_empty(path: &Path) -> Value {
    load_document(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "config load failed; using empty document");
        Value::Object(Map::new())
    })
}

fn parse_or_default<T: DeserializeOwned + Default>(document: Value, kind: &str) -> T {
    serde_json::from_value(document).unwrap_or_else(|e| {
        warn!(document = kind, error = %e, "unexpected document shape; using empty document");
        T::default()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
