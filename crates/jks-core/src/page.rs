#![forbid(unsafe_code)]

//! In-memory page for headless hosts and tests.

use std::collections::BTreeMap;

use crate::error::PageError;
use crate::timezone::TimezonePage;

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryElement {
    /// `None` for elements that carry no value (`<div>`, `<span>`).
    value: Option<String>,
    /// `None` for elements without an HTML style (`<svg>`, `<math>`).
    visible: Option<bool>,
}

/// A page made of id-addressed elements with a value and a visibility flag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryPage {
    elements: BTreeMap<String, MemoryElement>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_element(mut self, id: &str, value: Option<&str>, visible: Option<bool>) -> Self {
        self.elements.insert(
            id.to_string(),
            MemoryElement {
                value: value.map(str::to_string),
                visible,
            },
        );
        self
    }

    /// Add a visible field holding `value`.
    #[must_use]
    pub fn with_field(self, id: &str, value: &str) -> Self {
        self.with_element(id, Some(value), Some(true))
    }

    /// Add a hidden element without a value (an alert box).
    #[must_use]
    pub fn with_hidden(self, id: &str) -> Self {
        self.with_element(id, None, Some(false))
    }

    /// Add an element that neither holds a value nor has a style to change.
    #[must_use]
    pub fn with_foreign(self, id: &str) -> Self {
        self.with_element(id, None, None)
    }

    /// Visibility of `id`; `None` if absent or not styleable.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id)?.visible
    }

    fn element(&self, id: &str) -> Result<&MemoryElement, PageError> {
        self.elements.get(id).ok_or_else(|| PageError::not_found(id))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut MemoryElement, PageError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PageError::not_found(id))
    }
}

fn not_a_field(id: &str) -> PageError {
    PageError::UnexpectedElement {
        id: id.to_string(),
        expected: "a field",
    }
}

fn not_styleable(id: &str) -> PageError {
    PageError::UnexpectedElement {
        id: id.to_string(),
        expected: "an HTML element",
    }
}

impl TimezonePage for MemoryPage {
    fn field_value(&self, id: &str) -> Result<String, PageError> {
        self.element(id)?.value.clone().ok_or_else(|| not_a_field(id))
    }

    fn check_writable(&self, id: &str) -> Result<(), PageError> {
        match self.element(id)?.value {
            Some(_) => Ok(()),
            None => Err(not_a_field(id)),
        }
    }

    fn check_revealable(&self, id: &str) -> Result<(), PageError> {
        match self.element(id)?.visible {
            Some(_) => Ok(()),
            None => Err(not_styleable(id)),
        }
    }

    fn set_field_value(&mut self, id: &str, value: &str) -> Result<(), PageError> {
        let el = self.element_mut(id)?;
        let Some(slot) = el.value.as_mut() else {
            return Err(not_a_field(id));
        };
        *slot = value.to_string();
        Ok(())
    }

    fn reveal(&mut self, id: &str) -> Result<(), PageError> {
        let el = self.element_mut(id)?;
        let Some(visible) = el.visible.as_mut() else {
            return Err(not_styleable(id));
        };
        *visible = true;
        Ok(())
    }
}
