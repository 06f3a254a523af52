//! Structured logging using **tracing**.
//!
//! The JSON subscriber writes to stderr so stdout stays free for the
//! human-readable audit and fixer output.

/// Initializes the global tracing collector (subscriber).
///
/// Call *once* at the beginning of the binary's runtime.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=siteaudit_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
