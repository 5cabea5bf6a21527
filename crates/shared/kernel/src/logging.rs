use ocean_domain::config::LoggingConfig;
use ocean_logger::{Logger, LoggerError};

/// Installs the global subscriber from the `[logging]` table.
///
/// Console output is always on; a `directory` adds rolling files, JSON when `json` is set.
///
/// # Errors
/// Propagates [`LoggerError`] for an unknown level, a bad filter, an unusable
/// directory or a subscriber that is already installed.
pub fn init_logging(name: &str, config: &LoggingConfig) -> Result<Logger, LoggerError> {
    let builder = Logger::builder().name(name).level_str(&config.level)?;
    let builder = match &config.filter {
        Some(filter) => builder.env_filter(filter.as_str()),
        None => builder,
    };

    match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init(),
        None => builder.init(),
    }
}
