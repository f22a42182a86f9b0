//! Eligibility Evaluator: judges extracted resume text against `EligibilityCriteria`.
//!
//! Pure and stateless: the same text and criteria always produce the same result.
//! Matching is deliberately loose: lowercase substring search with no word
//! boundaries, so "pythonic" satisfies "python".

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::screening::criteria::EligibilityCriteria;

lazy_static! {
    /// A run of ASCII digits directly followed by `%`. Only runs of exactly two
    /// digits count as an education percentage; see `two_digit_percentages`.
    static ref PERCENT_PATTERN: Regex = Regex::new(r"([0-9]+)%").unwrap();
}

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Verdict for one resume. `skills_met` is true iff `missing_skills` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub education_met: bool,
    pub skills_met: bool,
    pub missing_skills: Vec<String>,
}

impl EligibilityResult {
    /// Both rules pass.
    pub fn is_eligible(&self) -> bool {
        self.education_met && self.skills_met
    }

    /// One-line human-readable verdict.
    pub fn summary(&self) -> String {
        if self.is_eligible() {
            return "Eligible: education and skills criteria met.".to_string();
        }

        let mut unmet = Vec::new();
        if !self.education_met {
            unmet.push("education criteria not met".to_string());
        }
        if !self.skills_met {
            unmet.push(format!(
                "missing skills: {}",
                self.missing_skills.join(", ")
            ));
        }
        format!("Not eligible: {}.", unmet.join("; "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Evaluates `text` against `criteria`. Never fails; empty text simply matches nothing.
pub fn evaluate(text: &str, criteria: &EligibilityCriteria) -> EligibilityResult {
    let text = text.to_lowercase();

    let education_met =
        two_digit_percentages(&text).any(|percent| percent >= criteria.min_education_percent);

    let missing_skills: Vec<String> = criteria
        .required_skills
        .iter()
        .filter(|skill| !text.contains(skill.to_lowercase().as_str()))
        .cloned()
        .collect();

    EligibilityResult {
        education_met,
        skills_met: missing_skills.is_empty(),
        missing_skills,
    }
}

/// Yields every two-digit percentage in `text`, left to right.
/// `5%` and `100%` are skipped: the digit run must be exactly two long.
fn two_digit_percentages(text: &str) -> impl Iterator<Item = u32> + '_ {
    PERCENT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter(|digits| digits.len() == 2)
        .filter_map(|digits| digits.as_str().parse().ok())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn skill_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,6}", 0..6)
    }

    proptest! {
        /// Property: skills_met holds exactly when nothing is missing
        #[test]
        fn skills_met_iff_nothing_missing(text in "[ -~]{0,120}", skills in skill_list()) {
            let result = evaluate(&text, &EligibilityCriteria::new(50, skills));
            prop_assert_eq!(result.skills_met, result.missing_skills.is_empty());
        }

        /// Property: uppercasing the text never changes the verdict
        #[test]
        fn evaluation_is_case_invariant(
            text in "[ -~]{0,120}",
            skills in skill_list(),
            min in 0u32..100,
        ) {
            let rules = EligibilityCriteria::new(min, skills);
            prop_assert_eq!(evaluate(&text, &rules), evaluate(&text.to_uppercase(), &rules));
        }

        /// Property: missing skills are a subsequence of the configured list
        #[test]
        fn missing_skills_preserve_order(text in "[a-z ]{0,80}", skills in skill_list()) {
            let result = evaluate(&text, &EligibilityCriteria::new(50, skills.clone()));
            let mut configured = skills.iter();
            for missing in &result.missing_skills {
                prop_assert!(configured.any(|s| s == missing));
            }
        }

        /// Property: a text listing every skill satisfies the skills rule
        #[test]
        fn listed_skills_are_found(skills in skill_list()) {
            let text = skills.join(", ").to_uppercase();
            let result = evaluate(&text, &EligibilityCriteria::new(50, skills));
            prop_assert!(result.skills_met);
        }

        /// Property: any two-digit percentage at or above the threshold qualifies
        #[test]
        fn qualifying_percentage_is_detected(min in 10u32..100, extra in 0u32..100) {
            let percent = (min + extra).min(99);
            let text = format!("Aggregate: {percent}%");
            prop_assert!(evaluate(&text, &EligibilityCriteria::new(min, Vec::<String>::new())).education_met);
        }
    }
}
