use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score for a posting that states no usable salary.
pub const NEUTRAL_SALARY_SCORE: f64 = 50.0;
/// A below-floor salary still counts as a match at this share of the floor.
const CLOSE_ENOUGH_PERCENT: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryMatch {
    #[serde(rename = "match")]
    pub is_match: bool,
    pub score: f64,
}

impl SalaryMatch {
    fn neutral() -> Self {
        Self {
            is_match: true,
            score: NEUTRAL_SALARY_SCORE,
        }
    }
}

fn salary_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+[,0-9]*").expect("salary pattern is valid"))
}

/// Extracts the first ASCII-digit figure from free-form salary text, e.g.
/// "$120k - $160k" yields 120000 and "$135,000" yields 135000.
///
/// The thousands multiplier applies when the text contains a lowercase `k`
/// anywhere; "$120K" is taken at face value.
pub fn parse_salary(text: &str) -> Option<f64> {
    let digits: String = salary_number_regex()
        .find(text)?
        .as_str()
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = digits.parse::<f64>().ok()?;

    Some(if text.contains('k') { value * 1000.0 } else { value })
}

/// Compares the posting's salary against the candidate's floor.
pub fn check_salary(salary: Option<&str>, minimum: f64) -> SalaryMatch {
    let Some(value) = salary.and_then(parse_salary) else {
        return SalaryMatch::neutral();
    };

    if value >= minimum {
        return SalaryMatch {
            is_match: true,
            score: 100.0,
        };
    }

    let percent = value / minimum * 100.0;
    SalaryMatch {
        is_match: percent >= CLOSE_ENOUGH_PERCENT,
        score: percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_above_minimum() {
        let result = check_salary(Some("$120k - $160k"), 100_000.0);
        assert_eq!(
            result,
            SalaryMatch {
                is_match: true,
                score: 100.0
            }
        );
    }

    #[test]
    fn test_absent_salary_is_neutral() {
        let result = check_salary(None, 100_000.0);
        assert!(result.is_match);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_text_without_digits_is_neutral() {
        let result = check_salary(Some("Competitive"), 100_000.0);
        assert!(result.is_match);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_salary("$135,000 per year"), Some(135_000.0));
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(parse_salary("١٢٠ or $90k"), Some(90_000.0));
        assert_eq!(parse_salary("١٢٠"), None);
    }

    #[test]
    fn test_very_long_figure_does_not_overflow() {
        let value = parse_salary("$123456789012345678901234").unwrap();
        assert!(value > 1.0e23);
        assert_eq!(
            check_salary(Some("$123456789012345678901234"), 100_000.0).score,
            100.0
        );
    }

    #[test]
    fn test_uppercase_k_is_not_a_multiplier() {
        assert_eq!(parse_salary("$120K"), Some(120.0));
        let result = check_salary(Some("$120K"), 100_000.0);
        assert!(!result.is_match);
        assert!(result.score < 1.0);
    }

    #[test]
    fn test_close_enough_below_minimum() {
        let result = check_salary(Some("$90k"), 100_000.0);
        assert!(result.is_match);
        assert!((result.score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_far_below_minimum() {
        let result = check_salary(Some("$60,000"), 100_000.0);
        assert!(!result.is_match);
        assert!((result.score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_minimum_always_matches() {
        let result = check_salary(Some("$1"), 0.0);
        assert!(result.is_match);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_serializes_match_key() {
        let value = serde_json::to_value(check_salary(None, 0.0)).unwrap();
        assert_eq!(value["match"], true);
        assert_eq!(value["score"], 50.0);
    }
}
