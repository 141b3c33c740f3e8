#![forbid(unsafe_code)]

use jks_core::{PageConfig, PageError, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::{Listener, LocationNavigator, install_key_dispatcher, run_timezone_check};
use crate::ready::{ReadyAction, ready_action};

/// Handle returned by `installScoped`.
///
/// Owns the document listeners. They stay attached while the handle is alive
/// and are detached by `dispose()` or when the JS wrapper is collected, so the
/// caller must keep it. Pages that never detach use `install` instead.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JksPage {
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl JksPage {
    /// Detach every listener installed by this handle.
    pub fn dispose(&mut self) {
        self.listeners.clear();
    }
}

fn page_config(options: Option<JsValue>) -> Result<PageConfig, JsValue> {
    let Some(options) = options.filter(|v| !v.is_undefined() && !v.is_null()) else {
        return Ok(PageConfig::default());
    };
    let json: String = js_sys::JSON::stringify(&options)?.into();
    PageConfig::from_json_str(&json).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn window_and_document() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    Ok((window, document))
}

fn report(err: &PageError) {
    warn!(error = %err, "timezone check skipped");
    web_sys::console::warn_1(&JsValue::from_str(&format!("jks: timezone check skipped: {err}")));
}

fn timezone_check_or_report(document: &Document, config: &PageConfig) -> bool {
    match run_timezone_check(document, config) {
        Ok(check) => check.is_mismatch(),
        Err(err) => {
            report(&err);
            false
        }
    }
}

fn attach_page(options: Option<JsValue>) -> Result<Vec<Listener>, JsValue> {
    let config = page_config(options)?;
    let (window, document) = window_and_document()?;

    let mut listeners = Vec::with_capacity(2);
    listeners.push(
        install_key_dispatcher(&document, LocationNavigator::new(window), config.trace_keys)
            .map_err(|err| JsValue::from_str(&err.to_string()))?,
    );

    match ready_action(&document.ready_state()) {
        ReadyAction::RunNow => {
            timezone_check_or_report(&document, &config);
        }
        ReadyAction::WaitForContentLoaded => {
            let doc = document.clone();
            let listener = Listener::attach(&document, "DOMContentLoaded", true, move |_| {
                timezone_check_or_report(&doc, &config);
            })
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
            listeners.push(listener);
        }
    }

    Ok(listeners)
}

/// Install the key command dispatcher and schedule the timezone check for the
/// rest of the page's lifetime.
///
/// `options` is an optional object with `chosen_id`, `browser_id`,
/// `alert_id` and `trace_keys`.
#[wasm_bindgen]
pub fn install(options: Option<JsValue>) -> Result<(), JsValue> {
    for listener in attach_page(options)? {
        listener.persist();
    }
    Ok(())
}

/// Like [`install`], but returns a handle that detaches the listeners.
#[wasm_bindgen(js_name = installScoped)]
pub fn install_scoped(options: Option<JsValue>) -> Result<JksPage, JsValue> {
    Ok(JksPage {
        listeners: attach_page(options)?,
    })
}

/// Run the timezone check immediately. Returns `true` when the alert was
/// revealed.
#[wasm_bindgen(js_name = checkTimezone)]
pub fn check_timezone_now(options: Option<JsValue>) -> Result<bool, JsValue> {
    let config = page_config(options)?;
    let (_, document) = window_and_document()?;
    Ok(timezone_check_or_report(&document, &config))
}
