#![forbid(unsafe_code)]

use std::fmt;

/// Failure while reading or mutating the host page.
///
/// Handlers treat every variant as "skip this action"; none of them is
/// surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// No element with the designated id.
    ElementNotFound { id: String },
    /// The element exists but is not of the kind the handler needs.
    UnexpectedElement { id: String, expected: &'static str },
    /// The browser did not resolve a timezone identifier.
    TimezoneUnavailable,
    /// A host (DOM/JS) call failed.
    Host(String),
}

impl PageError {
    #[must_use]
    pub fn not_found(id: &str) -> Self {
        Self::ElementNotFound { id: id.to_string() }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound { id } => write!(f, "element #{id} not found"),
            Self::UnexpectedElement { id, expected } => {
                write!(f, "element #{id} is not {expected}")
            }
            Self::TimezoneUnavailable => write!(f, "browser timezone unavailable"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for PageError {}

/// Invalid page options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Options were not valid JSON for [`PageConfig`](crate::config::PageConfig).
    Parse(String),
    /// An element id option was empty.
    EmptyId(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid page options: {msg}"),
            Self::EmptyId(field) => write!(f, "page option `{field}` must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_element() {
        assert_eq!(
            PageError::not_found("timezone-alert").to_string(),
            "element #timezone-alert not found"
        );
        assert_eq!(
            ConfigError::EmptyId("alert_id").to_string(),
            "page option `alert_id` must not be empty"
        );
    }
}
