//! Job matcher — scores job postings against a candidate's resume and search
//! criteria, and renders a prompt for model-assisted review.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;

pub use errors::MatcherError;
pub use matching::{MatchDetails, MatchResult, Matcher, Recommendation};
pub use models::{CandidateProfile, JobPosting, SearchCriteria};
