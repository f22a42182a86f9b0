use anyhow::{Context, Result};

use crate::screening::criteria::{
    parse_skill_list, EligibilityCriteria, DEFAULT_MIN_EDUCATION_PERCENT,
};

/// Default request body cap for resume uploads (20 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Eligibility rules, fixed for the lifetime of the process.
    pub criteria: EligibilityCriteria,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_education_percent = match var("MIN_EDUCATION_PERCENT") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("MIN_EDUCATION_PERCENT must be a non-negative integer")?,
            None => DEFAULT_MIN_EDUCATION_PERCENT,
        };

        let criteria = match var("REQUIRED_SKILLS") {
            Some(raw) => EligibilityCriteria::new(min_education_percent, parse_skill_list(&raw)),
            None => EligibilityCriteria {
                min_education_percent,
                ..EligibilityCriteria::default()
            },
        };

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: match var("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            criteria,
        })
    }
}
