//! Logging facade
//!
//! The crate logs through either the `log` crate (default feature) or the
//! `tracing` crate (feature `tracing`). The two backends are mutually
//! exclusive; every record is emitted under the `portal_breadcrumbs` target so
//! hosts can filter breadcrumb chatter separately from their own output.
//!
//! ```ignore
//! use portal_breadcrumbs::{debug_log, trace_log};
//!
//! trace_log!("resolving label for '{}'", path);
//! debug_log!("trail rule fired: {:?}", rule);
//! ```

#[cfg(all(feature = "log", feature = "tracing"))]
compile_error!("features `log` and `tracing` are mutually exclusive; enable only one");

/// Log target shared by every record this crate emits.
pub const LOG_TARGET: &str = "portal_breadcrumbs";

/// Dispatch a record to whichever backend is compiled in.
///
/// Not meant to be called directly; use the level macros below.
#[doc(hidden)]
#[macro_export]
macro_rules! __breadcrumb_log {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(not(any(feature = "log", feature = "tracing")))]
        let _ = format_args!($($arg)*);
    }};
}

/// Trace-level record: resolver and matcher internals.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__breadcrumb_log!(trace, $($arg)*) };
}

/// Debug-level record: trail rules, processed locations, no-op navigation.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__breadcrumb_log!(debug, $($arg)*) };
}

/// Warn-level record: configuration problems.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__breadcrumb_log!(warn, $($arg)*) };
}
