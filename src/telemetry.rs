use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::AppEnvironment;

/// JSON lines in production, human-readable output elsewhere. `RUST_LOG`
/// overrides the default `info` level.
pub fn init_tracing(env: &AppEnvironment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match env {
        AppEnvironment::Production => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialised: {}", e);
    }
}
