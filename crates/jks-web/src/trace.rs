#![forbid(unsafe_code)]

use jks_core::Dispatch;

/// Console line for an observed key, when key tracing is on.
#[must_use]
pub fn key_trace<'a>(outcome: Dispatch, trace_keys: bool, dom_key: &'a str) -> Option<&'a str> {
    (trace_keys && outcome.observed()).then_some(dom_key)
}
