use crate::Environment;
use tracing::{Subscriber, debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn default_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=info,sea_orm=warn")
        } else {
            EnvFilter::new("debug,sea_orm=info,hyper=info")
        }
    })
}

/// Build the subscriber without installing it.
///
/// - **Production**: JSON lines, one flattened object per event
/// - **Development**: pretty, human-readable output
///
/// Both carry an `ErrorLayer` for span traces and honour `RUST_LOG`.
/// Tests can scope it with `tracing::subscriber::with_default`.
pub fn subscriber(environment: &Environment) -> Box<dyn Subscriber + Send + Sync> {
    let filter = default_filter(environment);

    if environment.is_production() {
        Box::new(
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(false)
                        .flatten_event(true),
                )
                .with(tracing_error::ErrorLayer::default())
                .with(filter),
        )
    } else {
        Box::new(
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_file(false)
                        .with_line_number(false)
                        .pretty(),
                )
                .with(tracing_error::ErrorLayer::default())
                .with(filter),
        )
    }
}

/// Install [`subscriber`] as the process-wide default.
///
/// Environment variables:
/// - `APP_ENV`: "production" for JSON logs (default: development)
/// - `RUST_LOG`: Override log levels (e.g., "debug", "comments_api=trace")
///
/// Calling it again is harmless: the first subscriber stays in place.
pub fn init_tracing(environment: &Environment) {
    match tracing::subscriber::set_global_default(subscriber(environment)) {
        Ok(()) => info!(
            "Tracing initialized with ErrorLayer. Environment: {:?}",
            environment
        ),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
