use anyhow::{Context, Result};
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_FILTER: &str = "heartguard=warn";

/// `spec` is the raw `RUST_LOG` value. A usable spec replaces the default
/// outright, so `heartguard=debug` really does enable debug events.
pub fn env_filter(spec: Option<&str>) -> EnvFilter {
    spec.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber, writing to stderr so stdout stays clean
/// for JSON reports.
pub fn init() -> Result<()> {
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(env_filter(spec.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_under(spec: Option<&str>, level: Level) -> bool {
        let subscriber = tracing_subscriber::registry().with(env_filter(spec));
        tracing::subscriber::with_default(subscriber, || match level {
            Level::DEBUG => {
                tracing::enabled!(target: "heartguard::store::model_store", Level::DEBUG)
            }
            Level::INFO => {
                tracing::enabled!(target: "heartguard::store::model_store", Level::INFO)
            }
            _ => tracing::enabled!(target: "heartguard::store::model_store", Level::WARN),
        })
    }

    #[test]
    fn rust_log_overrides_the_default_level() {
        assert!(enabled_under(Some("heartguard=debug"), Level::DEBUG));
        assert!(enabled_under(Some("heartguard=info"), Level::INFO));
        assert!(!enabled_under(Some("heartguard=info"), Level::DEBUG));
    }

    #[test]
    fn default_keeps_warnings_only() {
        assert!(enabled_under(None, Level::WARN));
        assert!(!enabled_under(None, Level::INFO));
        assert!(!enabled_under(Some("   "), Level::DEBUG));
    }

    #[test]
    fn unparsable_spec_falls_back_to_default() {
        assert!(enabled_under(Some("heartguard=loud"), Level::WARN));
        assert!(!enabled_under(Some("heartguard=loud"), Level::DEBUG));
    }
}
