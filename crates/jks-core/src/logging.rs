#![forbid(unsafe_code)]

//! Diagnostic logging for page handlers.
//!
//! With the `tracing` feature (on by default) the `tracing` macros are
//! re-exported here and at the crate root. Without it, the same names expand
//! to nothing so handler code does not need `cfg` guards at every call site.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op `debug!` used when tracing is compiled out.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op `info!` used when tracing is compiled out.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op `trace!` used when tracing is compiled out.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op `warn!` used when tracing is compiled out.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
