//! Profiling utilities based on the `puffin` crate.

use crate::config::ProfilingMode;

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Global profiling server instance.
#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Initialize profiling with the specified mode.
///
/// # Example
/// ```no_run
/// use tessera_core::config::ProfilingMode;
/// use tessera_core::profiling::init_profiling;
///
/// init_profiling(ProfilingMode::On);
/// ```
pub fn init_profiling(mode: ProfilingMode) {
    match mode {
        ProfilingMode::Off => puffin::set_scopes_on(false),
        ProfilingMode::On => puffin::set_scopes_on(true),
        ProfilingMode::WithWebServer => {
            puffin::set_scopes_on(true);
            start_server();
        }
    }
}

#[cfg(feature = "profiling")]
fn start_server() {
    // Start the puffin server on the default port (8585)
    match puffin_http::Server::new("0.0.0.0:8585") {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

#[cfg(not(feature = "profiling"))]
fn start_server() {
    tracing::warn!("puffin web server requested but the `profiling` feature is disabled");
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per redraw so scopes are grouped by frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
