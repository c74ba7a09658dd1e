use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score when the description states no experience requirement.
pub const NEUTRAL_EXPERIENCE_SCORE: f64 = 75.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    #[serde(rename = "match")]
    pub is_match: bool,
    pub score: f64,
}

impl ExperienceMatch {
    fn new(is_match: bool, score: f64) -> Self {
        Self { is_match, score }
    }
}

/// Year-count patterns, tried in order; the first that matches wins.
fn experience_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [r"([0-9]+)\+?\s*years", r"([0-9]+)-([0-9]+)\s*years"]
            .into_iter()
            .map(|p| Regex::new(p).expect("experience pattern is valid"))
            .collect()
    })
}

/// Years of experience the description asks for, if it states any.
///
/// Only the leading ASCII-digit number of the first hit is used. "3-5 years"
/// is caught by the first pattern at "5 years", so it requires 5. Counts too
/// large for `u64` saturate.
pub fn required_years(description: &str) -> Option<u64> {
    let description = description.to_lowercase();
    experience_patterns()
        .iter()
        .find_map(|re| re.captures(&description))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|years| years as u64)
        .filter(|years| *years > 0)
}

/// Compares the candidate's years against the description's requirement.
/// One year short still matches at a reduced score.
pub fn check_experience(description: &str, candidate_years: u32) -> ExperienceMatch {
    let Some(required) = required_years(description) else {
        return ExperienceMatch::new(true, NEUTRAL_EXPERIENCE_SCORE);
    };

    match i128::from(candidate_years) - i128::from(required) {
        d if d >= 0 => ExperienceMatch::new(true, 100.0),
        -1 => ExperienceMatch::new(true, 80.0),
        _ => ExperienceMatch::new(false, 50.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meets_requirement() {
        assert_eq!(
            check_experience("5+ years", 5),
            ExperienceMatch::new(true, 100.0)
        );
    }

    #[test]
    fn test_two_years_short() {
        assert_eq!(
            check_experience("5+ years", 3),
            ExperienceMatch::new(false, 50.0)
        );
    }

    #[test]
    fn test_one_year_short_is_tolerated() {
        assert_eq!(
            check_experience("Requires 5 Years of Rust", 4),
            ExperienceMatch::new(true, 80.0)
        );
    }

    #[test]
    fn test_no_requirement_is_neutral() {
        assert_eq!(
            check_experience("Join our friendly team", 0),
            ExperienceMatch::new(true, 75.0)
        );
    }

    #[test]
    fn test_zero_years_counts_as_no_requirement() {
        assert_eq!(required_years("0 years required"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(required_years("٥ years abroad, 3 years of Rust"), Some(3));
        assert_eq!(required_years("٥ years"), None);
    }

    #[test]
    fn test_huge_requirement_saturates() {
        assert_eq!(required_years("99999999999 years"), Some(99_999_999_999));
        assert_eq!(
            required_years("123456789012345678901234567890 years"),
            Some(u64::MAX)
        );
        assert_eq!(
            check_experience("99999999999 years", 30),
            ExperienceMatch::new(false, 50.0)
        );
    }

    #[test]
    fn test_range_uses_first_hit() {
        assert_eq!(required_years("3-5 years of experience"), Some(5));
    }

    #[test]
    fn test_first_occurrence_in_text_wins() {
        assert_eq!(
            required_years("2 years of Go, 7+ years overall"),
            Some(2)
        );
    }
}
