use crate::types::{AppError, Result};
use crate::utils::config::{LogFormat, ServerConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level; `verbose` forces
/// `debug` for this crate.
pub fn init_tracing(server: &ServerConfig, verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        format!("{},wikirag=debug", server.log_level)
    } else {
        server.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_directive))
        .map_err(|e| {
            AppError::Configuration(format!("Invalid log level '{}': {}", default_directive, e))
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match server.log_format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
