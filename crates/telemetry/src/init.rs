// Path: crates/telemetry/src/init.rs
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// Default filter when `RUST_LOG` is unset. Keeps stderr quiet apart from warnings.
pub const DEFAULT_FILTER: &str = "warn";

/// Output format of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, one line per record.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes the global `tracing` subscriber writing to stderr, and routes
/// `log` records from dependencies into it.
pub fn init_tracing(format: LogFormat) -> Result<(), anyhow::Error> {
    let fmt_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(fmt::time::SystemTime)
            .boxed(),
        LogFormat::Text => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .boxed(),
    };
    let subscriber = Registry::default().with(env_filter()).with(fmt_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
