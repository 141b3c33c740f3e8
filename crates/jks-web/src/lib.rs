#![forbid(unsafe_code)]

//! WASM page scripts for jks.
//!
//! Two independent behaviors, each bound to one document event:
//! - `keyup` on the document runs the key command dispatcher from `jks-core`
//!   and navigates with `window.location`,
//! - once the document is parsed, the timezone check compares the
//!   server-chosen zone with `Intl.DateTimeFormat().resolvedOptions()`.
//!
//! `install` keeps the listeners for the page's lifetime; `installScoped`
//! returns a [`JksPage`] handle that detaches them when disposed or dropped.

pub mod element;
pub mod ready;
pub mod trace;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomPage, Listener, LocationNavigator, install_key_dispatcher, resolve_client_timezone};
#[cfg(target_arch = "wasm32")]
pub use wasm::JksPage;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct JksPage;

#[cfg(not(target_arch = "wasm32"))]
impl JksPage {
    pub fn new() -> Self {
        Self
    }

    pub fn dispose(&mut self) {}
}
