#![forbid(unsafe_code)]

//! Page options supplied by the embedding HTML.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CHOSEN_ID: &str = "timezone";
pub const DEFAULT_BROWSER_ID: &str = "timezone-browser";
pub const DEFAULT_ALERT_ID: &str = "timezone-alert";

/// Element ids and diagnostics switches for the page handlers.
///
/// Every field is optional in JSON; missing fields take the defaults that
/// match the jks templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Field holding the timezone chosen on the server.
    pub chosen_id: String,
    /// Field receiving the timezone the browser resolved.
    pub browser_id: String,
    /// Element revealed when the two differ.
    pub alert_id: String,
    /// Echo every observed key to the browser console.
    pub trace_keys: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            chosen_id: DEFAULT_CHOSEN_ID.to_string(),
            browser_id: DEFAULT_BROWSER_ID.to_string(),
            alert_id: DEFAULT_ALERT_ID.to_string(),
            trace_keys: true,
        }
    }
}

impl PageConfig {
    /// Parse and validate options JSON. An empty string yields the defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(s).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("chosen_id", &self.chosen_id),
            ("browser_id", &self.browser_id),
            ("alert_id", &self.alert_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyId(field));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_trace_keys(mut self, trace_keys: bool) -> Self {
        self.trace_keys = trace_keys;
        self
    }

    #[must_use]
    pub fn with_alert_id(mut self, id: impl Into<String>) -> Self {
        self.alert_id = id.into();
        self
    }
}
