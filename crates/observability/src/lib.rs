//! Tracing/logging setup shared by the console binaries.

/// Initialize process-wide tracing, with the output format taken from
/// `SKYPASS_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{init as init_with, LogFormat, LOG_FORMAT_ENV};
