use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global fmt subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to install tracing subscriber: {error}"))
}
