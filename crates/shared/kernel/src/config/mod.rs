use config::{Config, Environment, File};
use ocean_domain::config::SiteConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file looked up when no path is given (`site.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "site";
/// Prefix of environment overrides: `OCEAN__SERVER__PORT=8080` sets `server.port`.
pub const ENV_PREFIX: &str = "OCEAN";
const ENV_SEPARATOR: &str = "__";

#[ocean_derive::ocean_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Layered configuration: an optional base file, then `OCEAN__*` environment overrides.
///
/// Without an explicit file the loader looks for `site.{toml,json,yaml,...}` in the
/// working directory and carries on with defaults when it is absent. A file given
/// through [`ConfigLoader::file`] must exist.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Reads overrides from this map instead of the process environment.
    #[must_use]
    pub fn env_overrides<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered sources and deserializes them into `T`.
    ///
    /// # Errors
    /// Fails when an explicit file is missing, a source cannot be parsed, or the
    /// merged values do not fit `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let file = match &self.file {
            Some(path) => {
                info!(path = %path.display(), "Loading config file");
                File::from(path.as_path()).required(true)
            },
            None => {
                debug!(name = DEFAULT_CONFIG_NAME, "Looking for optional config file");
                File::with_name(DEFAULT_CONFIG_NAME).required(false)
            },
        };

        let env = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(self.env);

        let config = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }
}

/// Loads any deserializable configuration with the default layering.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    let loader = match path {
        Some(path) => loader.file(path.as_ref()),
        None => loader,
    };
    loader.load()
}

/// Loads and validates the site configuration.
///
/// # Errors
/// See [`ConfigLoader::load`] and [`validate`].
pub fn load_site_config(path: Option<impl AsRef<Path>>) -> Result<SiteConfig, ConfigError> {
    let config = load_config::<SiteConfig>(path)?;
    validate(&config)?;
    Ok(config)
}

/// Rejects values that would produce a broken site.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] naming the offending setting.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if let Some(token) = config.theme.find_invalid_token() {
        return Err(ConfigError::Invalid {
            message: format!("theme token {token} is empty or contains one of ; {{ }} < >").into(),
            context: None,
        });
    }

    let base = &config.site.base_url;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            message: format!("site.base_url must be an absolute http(s) URL, got '{base}'").into(),
            context: None,
        });
    }

    if config.site.lang.trim().is_empty() {
        return Err(ConfigError::Invalid { message: "site.lang cannot be empty".into(), context: None });
    }

    Ok(())
}
