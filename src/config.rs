//! Smoke runner configuration

/// Log levels accepted by the runner's tracing filter
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Level used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Where the tracing filter comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFilterSource {
    /// A level passed on the command line
    Explicit(String),
    /// The `RUST_LOG` environment variable
    Environment,
    /// [`DEFAULT_LOG_LEVEL`]
    Default,
}

/// Configuration for a smoke run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Emit ANSI colors in the report
    pub color: bool,
    /// Only run scenarios whose name contains this substring
    pub filter: Option<String>,
    /// Print only the summary
    pub quiet: bool,
    /// Print scenario names instead of running them
    pub list: bool,
    /// Explicit tracing filter level; `None` defers to `RUST_LOG`
    pub log_level: Option<String>,
}

impl RunnerConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        RunnerConfig {
            color: true,
            filter: None,
            quiet: false,
            list: false,
            log_level: None,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.filter = if filter.is_empty() { None } else { Some(filter) };
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Pick the tracing filter: explicit level, then `RUST_LOG` if set, then the default.
    pub fn log_filter_source(&self, env_is_set: bool) -> LogFilterSource {
        match &self.log_level {
            Some(level) => LogFilterSource::Explicit(level.to_ascii_lowercase()),
            None if env_is_set => LogFilterSource::Environment,
            None => LogFilterSource::Default,
        }
    }

    /// Whether a scenario with this name is selected
    pub fn selects(&self, name: &str) -> bool {
        self.filter.as_deref().map_or(true, |f| name.contains(f))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(format!(
                    "Invalid log level: {} (expected one of {})",
                    level,
                    LOG_LEVELS.join(", ")
                ));
            }
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert!(config.color);
        assert!(!config.quiet);
        assert_eq!(config.filter, None);
        assert_eq!(config.log_level, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_filter_order() {
        let explicit = RunnerConfig::new().with_log_level("DEBUG");
        assert_eq!(explicit.log_filter_source(true), LogFilterSource::Explicit("debug".to_string()));
        assert_eq!(RunnerConfig::new().log_filter_source(true), LogFilterSource::Environment);
        assert_eq!(RunnerConfig::new().log_filter_source(false), LogFilterSource::Default);
    }

    #[test]
    fn test_empty_filter_selects_all() {
        let config = RunnerConfig::new().with_filter("");
        assert!(config.selects("anything"));
    }

    #[test]
    fn test_bad_level_rejected() {
        let err = RunnerConfig::new().with_log_level("loud").validate().unwrap_err();
        assert!(err.contains("loud"));
    }
}
