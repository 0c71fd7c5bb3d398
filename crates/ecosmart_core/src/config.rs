//! Page wiring configuration.
//!
//! # Responsibility
//! - Name every element id, selector, class and storage key the site uses.
//! - Hold the tunable constants for counters, reveal and form replies.
//!
//! # Invariants
//! - `SiteConfig::default()` matches the shipped page markup.
//! - Partial JSON overrides fall back to defaults field by field.
//! - A config is only handed to hosts after `validate()` succeeds.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Durable storage key for the theme preference.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "ecosmart-theme";
/// Counter animation length in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 1600.0;
/// Minimum intersection ratio before a reveal element is shown.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

/// Element ids looked up with `getElementById`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub schedule_form: String,
    pub area_input: String,
    pub schedule_result: String,
    pub complaint_form: String,
    pub theme_toggle: String,
    pub year: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            schedule_form: "scheduleForm".to_string(),
            area_input: "areaInput".to_string(),
            schedule_result: "scheduleResult".to_string(),
            complaint_form: "complaintForm".to_string(),
            theme_toggle: "themeToggle".to_string(),
            year: "year".to_string(),
        }
    }
}

/// CSS selectors and class names shared between markup and behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Attribute naming the selector a trigger scrolls to.
    pub scroll_target_attr: String,
    pub nav_link: String,
    pub counter: String,
    /// Attribute carrying a counter's target value.
    pub counter_target_attr: String,
    pub reveal: String,
    /// Class added to revealed elements and the schedule result.
    pub visible_class: String,
    /// Class toggled on `<body>` for dark mode.
    pub dark_mode_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            scroll_target_attr: "data-scroll-target".to_string(),
            nav_link: ".nav-link".to_string(),
            counter: ".counter".to_string(),
            counter_target_attr: "data-target".to_string(),
            reveal: ".reveal".to_string(),
            visible_class: "visible".to_string(),
            dark_mode_class: "dark-mode".to_string(),
        }
    }
}

/// Counter animation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Inclusive lower bound of the random complaints target.
    pub random_min: u64,
    /// Exclusive upper bound of the random complaints target.
    pub random_max: u64,
    pub thousands_separator: char,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
            random_min: 120,
            random_max: 400,
            thousands_separator: ',',
        }
    }
}

/// Canned replies rendered by the form responders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    pub pickup_slot: String,
    pub complaint_acknowledgement: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            pickup_slot: "Monday, 10 AM".to_string(),
            complaint_acknowledgement: "Complaint Registered Successfully!".to_string(),
        }
    }
}

/// Full page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub ids: ElementIds,
    pub selectors: Selectors,
    pub counters: CounterConfig,
    pub replies: ReplyConfig,
    pub reveal_threshold: f64,
    pub theme_storage_key: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            selectors: Selectors::default(),
            counters: CounterConfig::default(),
            replies: ReplyConfig::default(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            log_level: crate::logging::default_log_level().to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses a (possibly partial) JSON override and validates the result.
    ///
    /// # Errors
    /// - `ConfigError::Parse` when `raw` is not valid JSON for this shape.
    /// - Any error returned by [`SiteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges hosts rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.counters.duration_ms.is_finite() && self.counters.duration_ms > 0.0) {
            return Err(ConfigError::InvalidDuration(self.counters.duration_ms));
        }
        if self.counters.random_min >= self.counters.random_max {
            return Err(ConfigError::EmptyRandomRange {
                min: self.counters.random_min,
                max: self.counters.random_max,
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::InvalidThreshold(self.reveal_threshold));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyField("theme_storage_key"));
        }
        if self.selectors.visible_class.trim().is_empty() {
            return Err(ConfigError::EmptyField("selectors.visible_class"));
        }
        if self.selectors.dark_mode_class.trim().is_empty() {
            return Err(ConfigError::EmptyField("selectors.dark_mode_class"));
        }
        crate::logging::normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }
}

/// Configuration parse/validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    InvalidDuration(f64),
    EmptyRandomRange { min: u64, max: u64 },
    InvalidThreshold(f64),
    EmptyField(&'static str),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "config is not valid JSON: {message}"),
            Self::InvalidDuration(value) => {
                write!(f, "counter duration must be a positive number, got {value}")
            }
            Self::EmptyRandomRange { min, max } => {
                write!(f, "random counter range [{min}, {max}) is empty")
            }
            Self::InvalidThreshold(value) => {
                write!(f, "reveal threshold must be within [0, 1], got {value}")
            }
            Self::EmptyField(field) => write!(f, "config field `{field}` must not be empty"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SiteConfig};

    #[test]
    fn default_config_is_valid() {
        SiteConfig::default()
            .validate()
            .expect("defaults should validate");
    }

    #[test]
    fn rejects_inverted_random_range() {
        let mut config = SiteConfig::default();
        config.counters.random_min = 400;
        config.counters.random_max = 120;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::EmptyRandomRange { min: 400, max: 120 }
        );
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let mut config = SiteConfig::default();
        config.reveal_threshold = 1.5;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidThreshold(1.5)
        );
    }

    #[test]
    fn rejects_blank_storage_key() {
        let mut config = SiteConfig::default();
        config.theme_storage_key = "  ".to_string();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::EmptyField("theme_storage_key")
        );
    }
}
