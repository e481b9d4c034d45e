//! Logging setup for the demo binary.

/// Initializes structured logging for the demo binary.
///
/// Log records go to stderr so that handler lines on stdout stay clean.
/// Verbosity is controlled with `RUST_LOG`:
/// - `RUST_LOG=info` - broker setup and completion
/// - `RUST_LOG=debug` - every attach, route span and handler match
/// - `RUST_LOG=courier=debug` - debug only for the facade crate
///
/// # Example
///
/// ```ignore
/// init_logging();
/// tracing::info!("starting");
/// ```
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
