//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::expand_tilde;
use crate::Config;
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `trace_level` is set.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Builds the level filter.
///
/// Level is determined by:
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(config))
}

/// The filter from `config.trace_level` alone, ignoring `RUST_LOG`.
///
/// ```
/// use compara::observability::configured_filter;
/// use compara::Config;
///
/// let config = Config { trace_level: Some("compara=trace".to_string()), ..Config::default() };
/// assert_eq!(configured_filter(&config).to_string(), "compara=trace");
/// assert_eq!(configured_filter(&Config::default()).to_string(), "info");
/// ```
pub fn configured_filter(config: &Config) -> EnvFilter {
    EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL))
}

/// Builds the subscriber: `filter` plus a fmt layer writing to stderr, or to
/// a rotating file when `log_file` is set.
///
/// If the log file's directory cannot be created, stderr is used instead.
pub fn build_subscriber(config: &Config, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    let file_writer = config.log_file.as_deref().and_then(|path| {
        FileWriter::create(expand_tilde(path))
            .map_err(|e| eprintln!("compara: cannot open log file {path}: {e}; logging to stderr"))
            .ok()
    });

    let (writer, ansi) = match file_writer {
        Some(file_writer) => (BoxMakeWriter::new(file_writer), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer)
}

/// Initializes the global tracing subscriber.
///
/// Idempotent: only the first call in a process takes effect.
///
/// ```
/// use compara::observability::init_tracing;
/// use compara::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let _ = build_subscriber(config, build_filter(config)).try_init();
}
