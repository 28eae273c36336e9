//! Logging and tracing bootstrap.

use bookstore_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the `EnvFilter`, preferring `RUST_LOG` over the configured directives.
pub fn env_filter(settings: &TelemetrySettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter))
}

/// Install the global tracing subscriber.
///
/// A subscriber that is already installed (tests, repeated calls) is left in
/// place.
pub fn init(settings: &TelemetrySettings) {
    let registry = tracing_subscriber::registry().with(env_filter(settings));

    let installed = match settings.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::info!(
            target: "bookstore-telemetry",
            format = ?settings.log_format,
            "telemetry initialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        let settings = TelemetrySettings::default();
        init(&settings);
        init(&settings);
    }

    #[test]
    fn json_format_installs() {
        let settings = TelemetrySettings {
            log_format: LogFormat::Json,
            ..TelemetrySettings::default()
        };
        init(&settings);
    }
}
