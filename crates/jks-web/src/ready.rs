#![forbid(unsafe_code)]

//! When to run work that needs the parsed document.

/// What to do with a handler that needs the whole document parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyAction {
    /// The document is parsed (`interactive` or `complete`); run now.
    RunNow,
    /// Still `loading`; wait for `DOMContentLoaded`.
    WaitForContentLoaded,
}

/// Decide from `document.readyState`.
///
/// Unknown states are treated as parsed, since every state after `loading`
/// implies `DOMContentLoaded` has already fired.
#[must_use]
pub fn ready_action(ready_state: &str) -> ReadyAction {
    if ready_state == "loading" {
        ReadyAction::WaitForContentLoaded
    } else {
        ReadyAction::RunNow
    }
}
