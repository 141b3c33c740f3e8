#![forbid(unsafe_code)]

//! Timezone mismatch notice.
//!
//! The server renders the timezone stored in the login session into a field.
//! If the browser resolves a different zone, the browser's zone is copied into
//! the settings form field and an alert is revealed so the user can update
//! their setting.
//!
//! The output field and the alert are both checked for presence and kind
//! before either is touched, so a missing or unsuitable element leaves the page
//! unchanged. The alert is revealed before the field is written: writing a
//! checked field cannot fail, while revealing goes through the style API.

use crate::config::PageConfig;
use crate::error::PageError;
use crate::{debug, info};

/// Element access needed by [`check_timezone`].
pub trait TimezonePage {
    /// Current value of the field with `id`.
    ///
    /// Fails with [`PageError::ElementNotFound`] if absent and
    /// [`PageError::UnexpectedElement`] if the element carries no value.
    fn field_value(&self, id: &str) -> Result<String, PageError>;

    /// Whether [`set_field_value`](Self::set_field_value) would succeed on `id`.
    fn check_writable(&self, id: &str) -> Result<(), PageError>;

    /// Whether [`reveal`](Self::reveal) can act on `id`.
    fn check_revealable(&self, id: &str) -> Result<(), PageError>;

    fn set_field_value(&mut self, id: &str, value: &str) -> Result<(), PageError>;

    /// Make the element with `id` visible.
    fn reveal(&mut self, id: &str) -> Result<(), PageError>;
}

/// Result of comparing the chosen and browser timezones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimezoneCheck {
    Match,
    Mismatch { chosen: String, client: String },
}

impl TimezoneCheck {
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

/// Compare the chosen timezone on `page` against `client` and, on mismatch,
/// record `client` into the output field and reveal the alert.
///
/// Comparison is exact: `"UTC"` and `"Etc/UTC"` differ.
pub fn check_timezone<P: TimezonePage + ?Sized>(
    page: &mut P,
    client: &str,
    config: &PageConfig,
) -> Result<TimezoneCheck, PageError> {
    let chosen = page.field_value(&config.chosen_id)?;

    if chosen == client {
        debug!(timezone = client, "timezone matches");
        return Ok(TimezoneCheck::Match);
    }

    page.check_writable(&config.browser_id)?;
    page.check_revealable(&config.alert_id)?;

    page.reveal(&config.alert_id)?;
    page.set_field_value(&config.browser_id, client)?;
    info!(chosen = %chosen, client = client, "timezone mismatch");

    Ok(TimezoneCheck::Mismatch {
        chosen,
        client: client.to_string(),
    })
}
