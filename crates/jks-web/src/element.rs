#![forbid(unsafe_code)]

//! Element classification used by the DOM glue.
//!
//! Decisions are made on tag names so they can be checked without a browser;
//! `dom` only performs the casts these helpers pick.

use jks_core::KeyRelease;

/// How an element exposes a form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Select,
    TextArea,
    /// No `value` property; only a `value` attribute, if any.
    Other,
}

impl FieldKind {
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") {
            Self::Input
        } else if tag.eq_ignore_ascii_case("select") {
            Self::Select
        } else if tag.eq_ignore_ascii_case("textarea") {
            Self::TextArea
        } else {
            Self::Other
        }
    }

    /// Whether the element has a `value` property to read.
    #[must_use]
    pub const fn has_value_property(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Whether a free-form value can be written. A `<select>` only accepts
    /// one of its options, so it is not a valid output.
    #[must_use]
    pub const fn accepts_value(self) -> bool {
        matches!(self, Self::Input | Self::TextArea)
    }
}

/// Key release from `event.key` and the target's tag name. Targets that are
/// not elements (the document itself) have no tag and never suppress.
#[must_use]
pub fn key_release(dom_key: &str, target_tag: Option<&str>) -> KeyRelease {
    KeyRelease::from_dom(dom_key, target_tag.unwrap_or(""))
}
