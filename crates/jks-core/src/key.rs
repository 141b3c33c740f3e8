#![forbid(unsafe_code)]

//! Normalized key-release events.
//!
//! The web host supplies the DOM `KeyboardEvent.key` string and the tag name
//! of the event target. Both are normalized here so the dispatcher never sees
//! raw DOM strings:
//! - single-character keys become [`KeyCode::Char`] (case preserved),
//! - tag names are classified into [`FocusTarget`] case-insensitively.

use std::fmt;

/// Normalized DOM key identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// The key produced exactly one character (`"D"`, `"-"`, `"+"`).
    Char(char),
    /// Anything else (`"Enter"`, `"ArrowLeft"`, `"Unidentified"`, `""`).
    Named(Box<str>),
}

impl KeyCode {
    #[must_use]
    pub fn from_dom_key(dom_key: &str) -> Self {
        let mut chars = dom_key.chars();
        if let Some(first) = chars.next()
            && chars.next().is_none()
        {
            return Self::Char(first);
        }
        Self::Named(dom_key.into())
    }

    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Named(_) => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Element that originated a key event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Input,
    Button,
    TextArea,
    /// Any other element, by lowercase tag name (`"body"`, `"a"`, ...).
    Other(Box<str>),
}

impl FocusTarget {
    /// Classify a DOM tag name. `Element.tagName` is uppercase for HTML
    /// documents, so comparison ignores ASCII case.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") {
            Self::Input
        } else if tag.eq_ignore_ascii_case("button") {
            Self::Button
        } else if tag.eq_ignore_ascii_case("textarea") {
            Self::TextArea
        } else {
            Self::Other(tag.to_ascii_lowercase().into())
        }
    }

    #[must_use]
    pub fn tag_name(&self) -> &str {
        match self {
            Self::Input => "input",
            Self::Button => "button",
            Self::TextArea => "textarea",
            Self::Other(tag) => tag,
        }
    }

    /// Whether key presses on this element belong to the element (typing,
    /// activating) rather than to page navigation.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Input | Self::Button | Self::TextArea)
    }
}

/// One document-level key release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyRelease {
    pub key: KeyCode,
    pub target: FocusTarget,
}

impl KeyRelease {
    #[must_use]
    pub fn new(key: KeyCode, target: FocusTarget) -> Self {
        Self { key, target }
    }

    /// Build from the raw DOM strings (`event.key`, `event.target.tagName`).
    #[must_use]
    pub fn from_dom(dom_key: &str, target_tag: &str) -> Self {
        Self {
            key: KeyCode::from_dom_key(dom_key),
            target: FocusTarget::from_tag_name(target_tag),
        }
    }
}
