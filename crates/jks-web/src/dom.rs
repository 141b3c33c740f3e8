#![forbid(unsafe_code)]

//! DOM-backed implementations of the `jks-core` capabilities.

use jks_core::{
    KeyDispatcher, KeyRelease, Navigator, PageConfig, PageError, Route, TimezoneCheck,
    TimezonePage, check_timezone,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent, Window,
};

use crate::element::{FieldKind, key_release};
use crate::trace::key_trace;

pub(crate) fn host_error(value: JsValue) -> PageError {
    PageError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Navigates by assigning `window.location.href` (full page load).
#[derive(Debug, Clone)]
pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&mut self, route: Route) -> Result<(), PageError> {
        self.window
            .location()
            .set_href(route.path())
            .map_err(host_error)
    }
}

/// Element access through `document.getElementById`.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

fn not_a_field(id: &str) -> PageError {
    PageError::UnexpectedElement {
        id: id.to_string(),
        expected: "an input or textarea",
    }
}

fn not_styleable(id: &str) -> PageError {
    PageError::UnexpectedElement {
        id: id.to_string(),
        expected: "an HTML element",
    }
}

fn value_of(el: &Element) -> Option<String> {
    match FieldKind::from_tag_name(&el.tag_name()) {
        FieldKind::Input => el.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value),
        FieldKind::Select => el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value),
        FieldKind::TextArea => el
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value),
        FieldKind::Other => el.get_attribute("value"),
    }
}

impl DomPage {
    fn element(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::not_found(id))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, PageError> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| not_styleable(id))
    }
}

impl TimezonePage for DomPage {
    fn field_value(&self, id: &str) -> Result<String, PageError> {
        value_of(&self.element(id)?).ok_or_else(|| PageError::UnexpectedElement {
            id: id.to_string(),
            expected: "an element with a value",
        })
    }

    fn check_writable(&self, id: &str) -> Result<(), PageError> {
        let el = self.element(id)?;
        let writable = match FieldKind::from_tag_name(&el.tag_name()) {
            FieldKind::Input => el.has_type::<HtmlInputElement>(),
            FieldKind::TextArea => el.has_type::<HtmlTextAreaElement>(),
            FieldKind::Select | FieldKind::Other => false,
        };
        if writable { Ok(()) } else { Err(not_a_field(id)) }
    }

    fn check_revealable(&self, id: &str) -> Result<(), PageError> {
        self.html_element(id).map(drop)
    }

    fn set_field_value(&mut self, id: &str, value: &str) -> Result<(), PageError> {
        let el = self.element(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            return Err(not_a_field(id));
        }
        Ok(())
    }

    fn reveal(&mut self, id: &str) -> Result<(), PageError> {
        self.html_element(id)?
            .style()
            .set_property("display", "block")
            .map_err(host_error)
    }
}

/// Timezone identifier from `Intl.DateTimeFormat().resolvedOptions().timeZone`.
pub fn resolve_client_timezone() -> Result<String, PageError> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    let zone = js_sys::Reflect::get(&options, &JsValue::from_str("timeZone")).map_err(host_error)?;
    zone.as_string()
        .filter(|zone| !zone.is_empty())
        .ok_or(PageError::TimezoneUnavailable)
}

/// Run the timezone check against the live document.
pub(crate) fn run_timezone_check(
    document: &Document,
    config: &PageConfig,
) -> Result<TimezoneCheck, PageError> {
    let client = resolve_client_timezone()?;
    let mut page = DomPage::new(document.clone());
    check_timezone(&mut page, &client, config)
}

/// An attached event listener. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn attach(
        target: &EventTarget,
        event: &'static str,
        once: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, PageError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_once(once);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(host_error)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Detach now. Equivalent to dropping.
    pub fn dispose(self) {}

    /// Keep the listener attached for the rest of the page's lifetime.
    pub fn persist(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        // Removing a listener that already fired with `once` is a no-op.
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish()
    }
}

fn key_release_from_event(event: &KeyboardEvent) -> KeyRelease {
    let tag = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|el| el.tag_name());
    key_release(&event.key(), tag.as_deref())
}

/// Register the key command dispatcher on `document`'s `keyup` events.
///
/// When `trace_keys` is set, every key that reaches the dispatcher is echoed
/// to the browser console.
pub fn install_key_dispatcher<N>(
    document: &Document,
    navigator: N,
    trace_keys: bool,
) -> Result<Listener, PageError>
where
    N: Navigator + 'static,
{
    let mut dispatcher = KeyDispatcher::new(navigator);
    Listener::attach(document, "keyup", false, move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let outcome = dispatcher.handle(&key_release_from_event(event));
        let dom_key = event.key();
        if let Some(line) = key_trace(outcome, trace_keys, &dom_key) {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    })
}
