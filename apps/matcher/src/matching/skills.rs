use std::collections::HashSet;

/// Percentage (0–100) of `required` skills the candidate covers.
///
/// A requirement counts as covered when any candidate skill contains it or is
/// contained by it, case-insensitively. The containment runs both ways so that
/// "React" covers "React Native" and "Node.js" covers "Node". `candidate` must
/// already be lowercased.
pub fn skill_match(candidate: &HashSet<String>, required: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let matched = required
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            candidate
                .iter()
                .any(|cs| cs.contains(&skill) || skill.contains(cs.as_str()))
        })
        .count();

    matched as f64 / required.len() as f64 * 100.0
}
