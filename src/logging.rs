use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Filter comes from `RUST_LOG`, defaulting
/// to warnings so command output stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
