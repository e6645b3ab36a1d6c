//! Logging abstraction layer.
//!
//! The navigation service logs through one of two backends, chosen by a
//! cargo feature. The two features are **mutually exclusive**; enable at most
//! one. With neither enabled every macro expands to nothing.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! What gets logged where:
//!
//! | Level   | Events                                                   |
//! |---------|----------------------------------------------------------|
//! | `trace` | cache hits, per-listener dispatch                        |
//! | `debug` | cache invalidation, resolved hrefs, active-state results |
//! | `info`  | container registration and removal                       |
//! | `warn`  | listener or router failures during href resolution       |
//! | `error` | href resolution exhausted every listener                 |
//!
//! ```ignore
//! use site_navigator::{debug_log, info_log, trace_log, warn_log};
//!
//! trace_log!("Active cache hit for page #{}", id);
//! debug_log!("Dispatching '{}' for page '{}'", channel, name);
//! info_log!("Registered container '{}'", name);
//! warn_log!("Router failed to assemble route '{}'", route);
//! ```
//!
//! The macros are exported so listeners written outside this crate log
//! through the same backend as the service.

/// Internal dispatcher shared by the level macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __nav_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
    };
}

/// Emit a **trace**-level message. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__nav_log!(trace, $($arg)*) };
}

/// Emit a **debug**-level message. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__nav_log!(debug, $($arg)*) };
}

/// Emit an **info**-level message. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__nav_log!(info, $($arg)*) };
}

/// Emit a **warn**-level message. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__nav_log!(warn, $($arg)*) };
}

/// Emit an **error**-level message. Accepts `format!`-style arguments.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => { $crate::__nav_log!(error, $($arg)*) };
}
