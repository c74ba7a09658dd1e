use serde::{Deserialize, Serialize};

/// Share of must-have skills the description has to mention to pass.
pub const MUST_HAVE_PASS_RATIO: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MustHaveResult {
    pub passed: bool,
    pub matched_count: usize,
    pub total_count: usize,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MustHaveResult {
    /// Contribution to the weighted score: 100 on pass, otherwise the share found.
    pub fn score(&self) -> f64 {
        if self.passed || self.total_count == 0 {
            100.0
        } else {
            self.matched_count as f64 / self.total_count as f64 * 100.0
        }
    }
}

/// Checks which must-have skills appear (case-insensitively) in `description`.
/// With no must-haves configured the check passes trivially.
pub fn check_must_haves(must_haves: &[String], description: &str) -> MustHaveResult {
    let description = description.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = must_haves
        .iter()
        .cloned()
        .partition(|skill| description.contains(&skill.to_lowercase()));

    MustHaveResult {
        passed: matched.len() as f64 >= must_haves.len() as f64 * MUST_HAVE_PASS_RATIO,
        matched_count: matched.len(),
        total_count: must_haves.len(),
        matched,
        missing,
    }
}
