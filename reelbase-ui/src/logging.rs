//! Browser console logging
//!
//! Routes `tracing` output to the developer console, one console call per
//! event, with ERROR and WARN events going to `console.error` and
//! `console.warn`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber
///
/// An invalid filter directive falls back to `info`.
pub fn init(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                // std::time is not available in the browser
                .without_time()
                .with_writer(MakeWebConsoleWriter::new()),
        )
        .try_init();
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_configured_level_is_used() {
        assert_eq!(filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        assert_eq!(filter("loud=[").max_level_hint(), Some(LevelFilter::INFO));
    }
}
