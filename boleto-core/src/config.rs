//! Configuration for payment code decoding

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the due-date base
pub const ENV_BASE_DATE: &str = "BOLETO_BASE_DATE";

/// Environment variable setting the due-date plausibility bound
pub const ENV_MAX_DUE_DATE: &str = "BOLETO_MAX_DUE_DATE";

/// FEBRABAN base date for due-date factors
pub fn febraban_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1997, 10, 7).expect("1997-10-07 is a valid date")
}

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Date that factor 0 would point at; factor N decodes to base + N days
    pub base_date: NaiveDate,

    /// Latest due date accepted as plausible (unbounded when `None`)
    pub max_due_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_date: febraban_base_date(),
            max_due_date: None,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_BASE_DATE) {
            config.base_date = parse_date(ENV_BASE_DATE, &value)?;
        }

        if let Some(value) = lookup(ENV_MAX_DUE_DATE) {
            config.max_due_date = Some(parse_date(ENV_MAX_DUE_DATE, &value)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject bounds that would make every due date implausible
    pub fn validate(&self) -> Result<()> {
        match self.max_due_date {
            Some(max) if max <= self.base_date => Err(Error::Config(format!(
                "max_due_date {} must be after base_date {}",
                max, self.base_date
            ))),
            _ => Ok(()),
        }
    }
}

fn parse_date(key: &str, value: &str) -> Result<NaiveDate> {
    value
        .trim()
        .parse::<NaiveDate>()
        .map_err(|e| Error::Config(format!("{} must be YYYY-MM-DD, got '{}': {}", key, value, e)))
}
