pub mod cli;
pub mod data;
pub mod error;
pub mod models;
pub mod settings;
pub mod shell;
pub mod state;
pub mod storage;
pub mod validation;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber. `RUST_LOG` wins over the configured level;
/// each `-v` raises the level one step. Logs go to stderr so command output
/// stays clean.
pub fn init_tracing(log_level: &str, verbose: u8) {
    let level = match verbose {
        0 => log_level,
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ikisky={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
