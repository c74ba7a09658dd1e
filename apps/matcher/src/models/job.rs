use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// A single job posting to evaluate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub location: String,
    /// Free-form, e.g. "$120k - $160k" or "$135,000".
    pub salary: Option<String>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::optional_string_list")]
    pub required_skills: Option<Vec<String>>,
}

impl JobPosting {
    /// The posting the binary evaluates when no job file is configured.
    pub fn example() -> Self {
        Self {
            title: "Senior Full Stack Engineer".to_string(),
            company: "Tech Startup Inc".to_string(),
            location: "Remote".to_string(),
            salary: Some("$120k - $160k".to_string()),
            description: "We are looking for a senior full stack engineer with 5+ years of \
                experience in JavaScript, React, Node.js, and AWS. You will be building \
                scalable microservices and leading technical projects."
                .to_string(),
            required_skills: Some(
                ["JavaScript", "React", "Node.js", "AWS", "PostgreSQL"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
        }
    }
}
