use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise `debug` selects between debug output
/// and errors only, so a failed run prints a single diagnostic line.
pub fn init_tracing(debug: bool) {
    let default_directive = if debug { "payouts=debug" } else { "payouts=error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
