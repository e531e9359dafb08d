use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Console logging. `RUST_LOG` wins over `level` when set.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let console = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    if tracing_subscriber::registry().with(console).try_init().is_ok() {
        tracing::info!(level, "Logging initialized");
    }
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("ecospire={level},warn"))
        .unwrap_or_else(|_| EnvFilter::new("ecospire=info,warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_does_not_panic() {
        init_logging("debug");
        init_logging("info");
        tracing::debug!("still alive");
    }

    #[test]
    fn test_default_filter_mentions_crate() {
        let filter = default_filter("trace").to_string();
        assert!(filter.contains("ecospire=trace"));
    }
}
