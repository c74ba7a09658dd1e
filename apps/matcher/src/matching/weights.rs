/// Per-check weights used to combine the five sub-scores into one 0–100 score.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub must_haves: f64,
    pub salary: f64,
    pub experience: f64,
    pub deal_breakers: f64,
}

/// Fixed weights for `Matcher::match_job`.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.35,
    must_haves: 0.25,
    salary: 0.15,
    experience: 0.15,
    deal_breakers: 0.10,
};

/// Minimum weighted score for an "apply" verdict.
pub const APPLY_THRESHOLD: f64 = 85.0;
/// Minimum weighted score for a "maybe" verdict.
pub const MAYBE_THRESHOLD: f64 = 70.0;

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.must_haves + self.salary + self.experience + self.deal_breakers
    }
}
