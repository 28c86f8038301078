//! Logging setup shared by reviewkit binaries

use std::str::FromStr;
use tracing::Level;

/// Install the global fmt subscriber, writing to stderr so stdout
/// stays clean for diff output. Unknown level names fall back to
/// `info`.
pub fn init(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
