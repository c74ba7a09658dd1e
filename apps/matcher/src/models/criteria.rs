use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Search criteria fields the matcher scores on. The document as written is
/// kept separately by `Matcher` for the analysis prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    #[serde(deserialize_with = "lenient::string_list")]
    pub must_have_skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub deal_breakers: Vec<String>,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub preferences: Preferences,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub salary_range: SalaryRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub remote: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryRange {
    /// Annual minimum in whole currency units. 0 means no floor.
    #[serde(
        deserialize_with = "lenient::lenient_f64",
        serialize_with = "lenient::whole_f64"
    )]
    pub minimum: f64,
}
