//! Tracing bootstrap.
//!
//! `RUST_LOG` overrides the configured level. Initialization happens at most
//! once per process and never panics.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceCell<String> = OnceCell::new();

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Install the global subscriber at `level` for this crate.
///
/// Returns false if logging was already set up (by this function or by the
/// host installing its own subscriber).
pub fn init(level: &str) -> bool {
    let level = normalize_level(level);
    let mut installed = false;

    INITIALIZED.get_or_init(|| {
        let default_filter = format!("slotgrid={level},slotgrid_replay={level}");
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();
        level.to_string()
    });

    installed
}

/// Level logging was initialized with, if it has been.
pub fn active_level() -> Option<&'static str> {
    INITIALIZED.get().map(String::as_str)
}

fn normalize_level(level: &str) -> &'static str {
    let lower = level.trim().to_ascii_lowercase();
    LEVELS
        .iter()
        .copied()
        .find(|l| *l == lower)
        .unwrap_or("info")
}
