use tracing_subscriber::EnvFilter;

/// Log to stderr, stdout is reserved for csv output.
/// Level is taken from RUST_LOG, `info` if not set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
