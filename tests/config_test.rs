//! Integration tests for smoke runner configuration

#[cfg(test)]
mod config_tests {
    use fallible::config::{LogFilterSource, RunnerConfig, LOG_LEVELS};

    #[test]
    fn test_config_builder_default() {
        let config = RunnerConfig::new();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.log_level, None);
        assert!(!config.list);
    }

    #[test]
    fn test_config_builder_chain() {
        let config = RunnerConfig::new()
            .with_color(false)
            .with_filter("map")
            .with_quiet(true)
            .with_list(true)
            .with_log_level("DEBUG");

        assert!(!config.color);
        assert!(config.quiet);
        assert!(config.list);
        assert!(config.selects("map_err"));
        assert!(!config.selects("expect"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_listed_level_validates() {
        for level in LOG_LEVELS {
            assert!(RunnerConfig::new().with_log_level(*level).validate().is_ok());
        }
    }

    #[test]
    fn test_invalid_level() {
        let err = RunnerConfig::new().with_log_level("verbose").validate().unwrap_err();
        assert!(err.starts_with("Invalid log level: verbose"));
    }

    #[test]
    fn test_explicit_level_wins_over_environment() {
        let config = RunnerConfig::new().with_log_level("trace");
        assert_eq!(config.log_filter_source(true), LogFilterSource::Explicit("trace".to_string()));
        assert_eq!(config.log_filter_source(false), LogFilterSource::Explicit("trace".to_string()));
    }

    #[test]
    fn test_environment_then_default() {
        let config = RunnerConfig::new();
        assert_eq!(config.log_filter_source(true), LogFilterSource::Environment);
        assert_eq!(config.log_filter_source(false), LogFilterSource::Default);
    }
}
