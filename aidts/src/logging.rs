//! Log output on stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

// Target prefixes, so these cover every `aidts_*` crate too.
const DEFAULT_FILTER: &str = "aidts=info";
const VERBOSE_FILTER: &str = "aidts=debug";

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
