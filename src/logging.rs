//! Simple tracing subscriber setup used by the application.

use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal},
};

/// Logs go to stderr; stdout carries nothing but the verdict.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
