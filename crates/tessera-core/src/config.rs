/// Configuration for the Tessera toolkit.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive, e.g. `"info"` or `"tessera_ui=trace"`.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Config {
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info".to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are disabled
    Off,
    /// Profiling scopes are recorded in-process
    On,
    /// Profiling scopes are recorded and served to external tools such as 'puffin_viewer'
    WithWebServer,
}
