//! Logging macros gated by a per-module `ENABLE_LOGS` switch.
//!
//! A module opts in by declaring the switch and importing the macros it uses:
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//! use crate::log_warn;
//!
//! log_warn!("settings file unreadable");
//! ```
//! Setting the switch to `false` silences that module without touching `RUST_LOG`.

/// Log at an explicit `log::Level` when the calling module's `ENABLE_LOGS` is set.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)*) => {
        if ENABLE_LOGS {
            log::log!($level, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log_at!(log::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log_at!(log::Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log_at!(log::Level::Error, $($arg)*)
    };
}
