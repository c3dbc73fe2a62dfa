//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the filter directive: `--verbose` wins, then `RUST_LOG`, then the
/// configured level.
pub fn filter_directive(env: Option<&str>, verbose: bool, configured: &str) -> String {
    match env {
        _ if verbose => "debug".to_string(),
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => configured.to_string(),
    }
}

/// Install a compact stderr subscriber. Calling it twice is a no-op.
pub fn init_tracing(verbose: bool, configured: &str) {
    let env = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env.as_deref(), verbose, configured);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_over_config() {
        assert_eq!(filter_directive(Some("rill=trace"), false, "info"), "rill=trace");
    }

    #[test]
    fn test_verbose_beats_env() {
        assert_eq!(filter_directive(Some("rill=trace"), true, "info"), "debug");
    }

    #[test]
    fn test_verbose_over_config() {
        assert_eq!(filter_directive(None, true, "info"), "debug");
        assert_eq!(filter_directive(Some(""), true, "info"), "debug");
    }

    #[test]
    fn test_configured_level() {
        assert_eq!(filter_directive(None, false, "warn"), "warn");
        assert_eq!(filter_directive(Some(""), false, "warn"), "warn");
    }
}
