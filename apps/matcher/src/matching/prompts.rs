// Prompt text for the downstream job-analysis model.

/// Job analysis prompt template.
/// Replace: {candidate_json}, {criteria_json}, {title}, {company},
///          {location}, {salary}, {description}
pub const JOB_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a job matching assistant. Analyze the following job posting and determine if it's a good match for the candidate.

Candidate Profile:
{candidate_json}

Search Criteria:
{criteria_json}

Job Posting:
Title: {title}
Company: {company}
Location: {location}
Salary: {salary}
Description: {description}

Provide a response in JSON format with:
1. matchScore (0-100): Overall match percentage
2. reasoning: Brief explanation of the score (2-3 sentences)
3. pros: Array of 3-5 positive aspects about this job
4. cons: Array of 2-4 concerns or gaps
5. recommendation: 'apply', 'maybe', or 'skip'

Consider:
- Skills alignment
- Experience level fit
- Career goals alignment
- Company culture fit
- Compensation expectations
- Location/remote preferences

Respond only with valid JSON."#;

/// Shown in place of a missing salary.
pub const SALARY_NOT_SPECIFIED: &str = "Not specified";

/// Fills `{key}` placeholders in a single left-to-right pass, so braces that
/// appear inside substituted values are never expanded. Unknown placeholders
/// are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_known_keys() {
        let out = fill_template("Hi {name}, {greeting}!", &[("name", "Ada"), ("greeting", "welcome")]);
        assert_eq!(out, "Hi Ada, welcome!");
    }

    #[test]
    fn test_fill_keeps_unknown_and_json_braces() {
        let out = fill_template("{\"a\": {x}} {missing}", &[("x", "1")]);
        assert_eq!(out, "{\"a\": 1} {missing}");
    }

    #[test]
    fn test_values_are_not_re_expanded() {
        let out = fill_template("{a} {b}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(out, "{b} B");
    }

    #[test]
    fn test_template_ends_with_json_instruction() {
        assert!(JOB_ANALYSIS_PROMPT_TEMPLATE.ends_with("Respond only with valid JSON."));
    }
}
