//! Tracing and logging setup shared by hosts embedding the procurement crates.

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LOG_FORMAT_ENV, LogFormat};

/// Initialize process-wide tracing using `PROCURA_LOG_FORMAT` and `RUST_LOG`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(LogFormat::from_env());
}

/// Initialize with an explicit output format.
pub fn init_with(format: LogFormat) {
    tracing::init_with(format);
}
