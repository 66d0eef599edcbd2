//! Tessera Core
//!
//! Ambient utilities shared by the Tessera crates: logging setup, configuration,
//! profiling hooks, hashed collections and math re-exports.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

use config::Config;

/// Install logging and profiling as described by `config`.
pub fn init(config: &Config) {
    logging::init_with(config);
    profiling::init_profiling(config.profiling);
}
