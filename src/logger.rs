use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when verbose.
/// chromiumoxide is kept at `warn` because it logs every CDP message it cannot decode.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "debug,chromiumoxide=warn"
    } else {
        "info,chromiumoxide=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // a second call (e.g. from tests) is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
