#![forbid(unsafe_code)]

//! Key command dispatch.
//!
//! [`KeyDispatcher`] turns one [`KeyRelease`] into at most one navigation.
//! The navigation effect is injected through [`Navigator`], so dispatch runs
//! the same way against `window.location` and against a recorder in tests.
//!
//! # Invariants
//! 1. Releases on an editable control never navigate.
//! 2. A bound key on any other element navigates exactly once.
//! 3. Unbound keys are ignored without error.

use crate::binding::lookup;
use crate::error::PageError;
use crate::key::KeyRelease;
use crate::route::Route;
use crate::{debug, warn};

/// Performs a full-page navigation.
pub trait Navigator {
    fn navigate(&mut self, route: Route) -> Result<(), PageError>;
}

impl<F> Navigator for F
where
    F: FnMut(Route) -> Result<(), PageError>,
{
    fn navigate(&mut self, route: Route) -> Result<(), PageError> {
        self(route)
    }
}

/// Outcome of handling one key release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Focus was on an editable control; the key belongs to it.
    Suppressed,
    /// The key was bound and navigation was requested.
    Navigated(Route),
    /// The key has no binding.
    Unbound,
}

impl Dispatch {
    /// Whether the key was seen by the dispatcher (not swallowed by focus).
    #[must_use]
    pub const fn observed(self) -> bool {
        !matches!(self, Self::Suppressed)
    }
}

/// Maps key releases to navigations.
#[derive(Debug)]
pub struct KeyDispatcher<N> {
    navigator: N,
}

impl<N: Navigator> KeyDispatcher<N> {
    #[must_use]
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn handle(&mut self, event: &KeyRelease) -> Dispatch {
        if event.target.is_editable() {
            return Dispatch::Suppressed;
        }

        debug!(key = %event.key, element = event.target.tag_name(), "key released");

        let Some(route) = lookup(&event.key) else {
            return Dispatch::Unbound;
        };
        if let Err(err) = self.navigator.navigate(route) {
            warn!(route = route.path(), error = %err, "navigation failed");
        }
        Dispatch::Navigated(route)
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

/// Navigator that records requested routes instead of leaving the page.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    visited: Vec<Route>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    /// Paths in request order.
    #[must_use]
    pub fn paths(&self) -> Vec<&'static str> {
        self.visited.iter().map(|route| route.path()).collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) -> Result<(), PageError> {
        self.visited.push(route);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BINDINGS;
    use crate::key::{FocusTarget, KeyCode};
    use crate::route::DayToken;

    fn dispatcher() -> KeyDispatcher<RecordingNavigator> {
        KeyDispatcher::new(RecordingNavigator::new())
    }

    #[test]
    fn body_focus_d_goes_to_today() {
        let mut d = dispatcher();
        let out = d.handle(&KeyRelease::from_dom("D", "BODY"));
        assert_eq!(out, Dispatch::Navigated(Route::Day(DayToken::Today)));
        assert_eq!(d.navigator().paths(), vec!["/day/today"]);
    }

    #[test]
    fn text_input_swallows_t() {
        let mut d = dispatcher();
        let out = d.handle(&KeyRelease::from_dom("T", "INPUT"));
        assert_eq!(out, Dispatch::Suppressed);
        assert!(!out.observed());
        assert!(d.navigator().visited().is_empty());
    }

    #[test]
    fn every_binding_navigates_once() {
        for (key, route) in BINDINGS {
            let mut d = dispatcher();
            let ev = KeyRelease::new(KeyCode::Char(key), FocusTarget::from_tag_name("main"));
            assert_eq!(d.handle(&ev), Dispatch::Navigated(route));
            assert_eq!(d.navigator().visited(), &[route]);
        }
    }

    #[test]
    fn editable_controls_suppress_every_binding() {
        for target in [FocusTarget::Input, FocusTarget::Button, FocusTarget::TextArea] {
            let mut d = dispatcher();
            for (key, _) in BINDINGS {
                let ev = KeyRelease::new(KeyCode::Char(key), target.clone());
                assert_eq!(d.handle(&ev), Dispatch::Suppressed);
            }
            assert!(d.navigator().visited().is_empty());
        }
    }

    #[test]
    fn unbound_keys_are_observed_but_ignored() {
        let mut d = dispatcher();
        for key in ["d", "x", "Enter", "Shift", "="] {
            let out = d.handle(&KeyRelease::from_dom(key, "BODY"));
            assert_eq!(out, Dispatch::Unbound);
            assert!(out.observed());
        }
        assert!(d.navigator().visited().is_empty());
    }

    #[test]
    fn navigation_failure_still_reports_route() {
        let mut d = KeyDispatcher::new(|_route: Route| -> Result<(), PageError> {
            Err(PageError::Host("location locked".into()))
        });
        let out = d.handle(&KeyRelease::from_dom("S", "A"));
        assert_eq!(out, Dispatch::Navigated(Route::Settings));
    }

    #[test]
    fn closure_navigator_receives_route() {
        let mut seen = Vec::new();
        {
            let mut d = KeyDispatcher::new(|route: Route| -> Result<(), PageError> {
                seen.push(route.path());
                Ok(())
            });
            d.handle(&KeyRelease::from_dom("+", "DIV"));
            d.handle(&KeyRelease::from_dom("-", "DIV"));
        }
        assert_eq!(seen, vec!["/day/tomorrow", "/day/yesterday"]);
    }
}
