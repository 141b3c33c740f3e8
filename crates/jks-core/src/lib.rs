#![forbid(unsafe_code)]

//! Core: key command dispatch and timezone mismatch detection for jks pages.
//!
//! Everything here is host-agnostic. Browser effects (navigation, element
//! access) are reached through the [`dispatch::Navigator`] and
//! [`timezone::TimezonePage`] traits, which `jks-web` implements over the DOM.

pub mod binding;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod key;
pub mod logging;
pub mod page;
pub mod route;
pub mod timezone;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};

pub use binding::{BINDINGS, lookup};
pub use config::PageConfig;
pub use dispatch::{Dispatch, KeyDispatcher, Navigator, RecordingNavigator};
pub use error::{ConfigError, PageError};
pub use key::{FocusTarget, KeyCode, KeyRelease};
pub use page::MemoryPage;
pub use route::{DayToken, Route};
pub use timezone::{TimezoneCheck, TimezonePage, check_timezone};
