use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration;
use crate::error::ValidationError;
use crate::random::Percent;

/// File-backed defaults. Every field is optional; flags given on the
/// command line win.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub rps: Option<u64>,
    pub duration: Option<DurationValue>,
    pub workers: Option<usize>,
    pub random_ua: Option<bool>,
    pub random_params: Option<bool>,
    pub random_headers: Option<bool>,
    pub random_methods: Option<bool>,
    pub malformed: Option<bool>,
    pub http_flood: Option<bool>,
    pub bypass_cache: Option<bool>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub keep_alive: Option<bool>,
    pub malformed_percent: Option<Percent>,
    pub jitter_percent: Option<Percent>,
    pub jitter_delay: Option<DurationValue>,
    pub report_interval: Option<DurationValue>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
}

/// Either whole seconds (`10`) or a suffixed string (`"500ms"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    /// # Errors
    ///
    /// Returns an error for zero or unparseable durations.
    pub fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
