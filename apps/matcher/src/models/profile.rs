use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::models::lenient;

/// Candidate resume document. Every field defaults so a partial or empty
/// document still deserializes, and a `null` field only resets itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub personal: Personal,
    pub skills: SkillCategories,
    pub experience: Value,
    pub career_goals: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Personal {
    #[serde(deserialize_with = "lenient::whole_count")]
    pub years_of_experience: u32,
}

/// Category name → skills, in the order the resume lists both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCategories(pub Vec<(String, Vec<String>)>);

impl SkillCategories {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<'de> Deserialize<'de> for SkillCategories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let categories = match Value::deserialize(deserializer)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(SkillCategories(
            categories
                .into_iter()
                .map(|(name, list)| (name, lenient::string_list(list).unwrap_or_default()))
                .collect(),
        ))
    }
}

impl Serialize for SkillCategories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, list) in &self.0 {
            map.serialize_entry(name, list)?;
        }
        map.end()
    }
}

impl CandidateProfile {
    /// Every skill across all categories, in document order.
    pub fn all_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flat_map(|(_, list)| list.iter().map(String::as_str))
            .collect()
    }

    /// Lowercased, deduplicated skill set used for matching.
    pub fn skill_set(&self) -> HashSet<String> {
        self.all_skills()
            .into_iter()
            .map(str::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CandidateProfile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_document_deserializes_to_default() {
        let profile = parse(json!({}));
        assert_eq!(profile.personal.years_of_experience, 0);
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_null());
    }

    #[test]
    fn test_camel_case_years_of_experience() {
        let profile = parse(json!({ "personal": { "name": "Sam", "yearsOfExperience": 7 } }));
        assert_eq!(profile.personal.years_of_experience, 7);
    }

    #[test]
    fn test_null_or_fractional_years_keep_the_skills() {
        let skills = json!({ "backend": ["Rust"] });

        let profile = parse(json!({ "personal": { "yearsOfExperience": null }, "skills": skills }));
        assert_eq!(profile.personal.years_of_experience, 0);
        assert_eq!(profile.all_skills(), vec!["Rust"]);

        let profile = parse(json!({ "personal": { "yearsOfExperience": 4.5 }, "skills": skills }));
        assert_eq!(profile.personal.years_of_experience, 4);
        assert_eq!(profile.all_skills(), vec!["Rust"]);

        let profile = parse(json!({ "personal": null, "skills": skills }));
        assert_eq!(profile.personal.years_of_experience, 0);
        assert_eq!(profile.all_skills(), vec!["Rust"]);
    }

    #[test]
    fn test_null_skill_category_is_empty() {
        let profile = parse(json!({ "skills": { "cloud": null, "tools": ["Git"] } }));
        assert_eq!(profile.all_skills(), vec!["Git"]);

        let profile = parse(json!({ "skills": null }));
        assert!(profile.skills.is_empty());

        let profile = parse(json!({ "skills": "Rust", "personal": { "yearsOfExperience": 3 } }));
        assert!(profile.skills.is_empty());
        assert_eq!(profile.personal.years_of_experience, 3);
    }

    #[test]
    fn test_all_skills_follows_document_order() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{ "skills": {
                "frontend": ["React", "CSS"],
                "backend": ["Node.js"],
                "languages": ["Rust"]
            } }"#,
        )
        .unwrap();
        assert_eq!(profile.all_skills(), vec!["React", "CSS", "Node.js", "Rust"]);
    }

    #[test]
    fn test_skill_set_is_lowercased_and_deduplicated() {
        let profile = parse(json!({ "skills": { "a": ["AWS", "aws"], "b": ["React"] } }));
        let set = profile.skill_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("aws"));
        assert!(set.contains("react"));
    }
}
