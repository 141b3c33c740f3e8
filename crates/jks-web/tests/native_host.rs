//! Native-target checks: the crate builds as a stub outside the browser and
//! the document readiness decision matches the DOM lifecycle.

#![cfg(not(target_arch = "wasm32"))]

use jks_web::JksPage;
use jks_web::ready::{ReadyAction, ready_action};
use pretty_assertions::assert_eq;

#[test]
fn stub_page_disposes_cleanly() {
    let mut page = JksPage::new();
    page.dispose();
    page.dispose();
}

#[test]
fn readiness_follows_document_lifecycle() {
    let decisions: Vec<_> = ["loading", "interactive", "complete"]
        .into_iter()
        .map(ready_action)
        .collect();
    assert_eq!(
        decisions,
        vec![
            ReadyAction::WaitForContentLoaded,
            ReadyAction::RunNow,
            ReadyAction::RunNow,
        ]
    );
}

#[test]
fn document_target_never_suppresses_navigation_keys() {
    use jks_core::{Dispatch, KeyDispatcher, RecordingNavigator};
    use jks_web::element::key_release;
    use jks_web::trace::key_trace;

    let mut dispatcher = KeyDispatcher::new(RecordingNavigator::new());
    let outcome = dispatcher.handle(&key_release("U", None));
    assert_eq!(dispatcher.navigator().paths(), vec!["/undone-tasks"]);
    assert_eq!(key_trace(outcome, true, "U"), Some("U"));

    let outcome = dispatcher.handle(&key_release("U", Some("TEXTAREA")));
    assert_eq!(outcome, Dispatch::Suppressed);
    assert_eq!(key_trace(outcome, true, "U"), None);
    assert_eq!(dispatcher.navigator().paths(), vec!["/undone-tasks"]);
}
