use taskswitch_core::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TASKSWITCH_LOG";

/// Installs the fmt subscriber. `log` records from this crate and the core
/// are forwarded through the subscriber's log bridge.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("logging already initialized: {err}");
    }
}
