use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Events go to stderr, filtered by `RUST_LOG`
/// (default `warn`), so the flight log on stdout stays readable.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call finds a subscriber already installed and keeps it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
