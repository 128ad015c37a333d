//! Status logging macros.
//!
//! Thin wrappers over [`tracing`] so every crate in the workspace reports
//! through the same subscriber. The CLI installs a formatter that renders
//! these as symbol-prefixed lines (`[+]`, `[*]`, `[-]`).

/// Informational status line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// A completed step worth celebrating.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "toolbelt::success", $($arg)*)
    };
}

/// Something degraded but recoverable.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

/// A failed operation.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
