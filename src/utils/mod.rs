pub mod date;
pub mod formatting;
pub mod fs;
pub mod path;
pub mod time;

pub use formatting::{format_duration, format_money};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr, `RUST_LOG` aware).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("workmanager=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
