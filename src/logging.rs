use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize structured logging with tracing.
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::fmt;
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr)
                    .json() // JSON output for structured logging
            );

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("[Logging] Global subscriber already set: {}", e);
            return;
        }

        tracing::info!("Structured logging initialized");
    });
}
