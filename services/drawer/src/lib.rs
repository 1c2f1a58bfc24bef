// Library interface for the drawer - exposes modules for testing

pub mod animator;
pub mod assets;
pub mod config;
pub mod controller;
pub mod display;
pub mod errors;
pub mod history;
pub mod sequencer;
pub mod session;
pub mod sound;
pub mod terminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging (JSON unless `LOG_FORMAT` says otherwise)
///
/// Logs go to stderr so they never interleave with the digit frames.
pub fn init_tracing() -> bool {
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "json".to_string())
        .eq_ignore_ascii_case("json");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "drawer=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    use_json
}
