use env_logger::{Builder, WriteStyle};
use log::LevelFilter;

/// How a binary wants its log output. The library itself only ever talks
/// to the `log` facade.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. "floor_planner=debug". Falls
    /// back to `RUST_LOG` when unset.
    pub filter: Option<String>,
    /// Level for anything the filter doesn't mention.
    pub default_level: LevelFilter,
    pub write_style: WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            write_style: WriteStyle::Auto,
            is_test: false,
        }
    }
}

/// Logger builder for `config`, not yet installed.
pub fn logger_builder(config: &LoggingConfig) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(config.default_level)
        .write_style(config.write_style)
        .is_test(config.is_test);
    let directives = config
        .filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok());
    if let Some(directives) = directives {
        builder.parse_filters(&directives);
    }
    builder
}

/// Install the global logger. Returns false if one was already in place,
/// which leaves the existing logger untouched.
pub fn init_logging(config: LoggingConfig) -> bool {
    let installed = logger_builder(&config).try_init().is_ok();
    if installed {
        log::debug!("logging initialized");
    }
    installed
}
