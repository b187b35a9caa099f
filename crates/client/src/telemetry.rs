use eyre::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise everything at `level` and
/// above is logged.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: Level) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
