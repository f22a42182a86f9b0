use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_EDUCATION_PERCENT: u32 = 50;

pub const DEFAULT_REQUIRED_SKILLS: &[&str] = &["python", "java", "dbms", "os"];

/// The two eligibility rules a resume is judged against.
/// Built once at startup and passed by reference into every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub min_education_percent: u32,
    /// Case-insensitive keywords, in the order they are reported when missing.
    pub required_skills: Vec<String>,
}

impl EligibilityCriteria {
    pub fn new<I, S>(min_education_percent: u32, required_skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EligibilityCriteria {
            min_education_percent,
            required_skills: required_skills.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        EligibilityCriteria::new(
            DEFAULT_MIN_EDUCATION_PERCENT,
            DEFAULT_REQUIRED_SKILLS.iter().copied(),
        )
    }
}

/// Splits a comma-separated skill list, trimming entries and dropping empty ones.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
