pub mod criteria;
pub mod job;
pub mod lenient;
pub mod profile;

pub use criteria::{Preferences, SalaryRange, SearchCriteria};
pub use job::JobPosting;
pub use profile::{CandidateProfile, Personal, SkillCategories};
