use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static LOG_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber once per process.
///
/// The filter comes from `RUST_LOG`, then `default_filter`, then `info`.
/// Events are written to stderr so that stdout stays free for command output.
pub fn log_init(default_filter: Option<&str>) {
    LOG_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter.unwrap_or(DEFAULT_FILTER)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_setup(filter);
    });
}

fn tracing_setup(filter: EnvFilter) {
    let format = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .compact();

    // another subscriber may already be installed, by a test harness for instance
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::log_init;

    #[test]
    fn log_init_is_idempotent() {
        log_init(Some("debug"));
        log_init(None);
        tracing::info!("logger initialized");
    }
}
