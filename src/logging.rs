use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    // RUST_LOG wins over --verbose.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
