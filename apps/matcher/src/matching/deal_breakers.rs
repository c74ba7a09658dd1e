use serde::{Deserialize, Serialize};

use crate::models::JobPosting;

const NO_REMOTE: &str = "no remote";
const REMOTE: &str = "remote";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealBreakerResult {
    pub has_deal_breakers: bool,
    /// Triggered phrases, as configured.
    pub deal_breakers: Vec<String>,
}

/// Returns the configured deal-breaker phrases this job triggers.
///
/// A phrase containing "no remote" is special when the candidate wants remote
/// work: it triggers only if neither the description nor the location says
/// "remote" anywhere. Every other phrase triggers on a case-insensitive
/// substring hit in the description.
pub fn check_deal_breakers(
    deal_breakers: &[String],
    wants_remote: bool,
    description: &str,
    job: &JobPosting,
) -> DealBreakerResult {
    let description = description.to_lowercase();
    let location = job.location.to_lowercase();

    let found: Vec<String> = deal_breakers
        .iter()
        .filter(|phrase| {
            let normalized = phrase.to_lowercase();
            if normalized.contains(NO_REMOTE) && wants_remote {
                return !description.contains(REMOTE) && !location.contains(REMOTE);
            }
            description.contains(&normalized)
        })
        .cloned()
        .collect();

    DealBreakerResult {
        has_deal_breakers: !found.is_empty(),
        deal_breakers: found,
    }
}
