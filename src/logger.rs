//! Logging setup for the command line front end.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Send `log` output to stderr at `level`. `RUST_LOG`, when set, takes precedence.
pub fn init_logger(level: LevelFilter) {
    Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp_millis()
        .format_target(false)
        .init();
}
