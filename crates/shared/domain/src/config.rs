use crate::theme::Theme;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the server and the exporter read from `site.toml` and `OCEAN__*`.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub site: SiteMeta,
    pub logging: LoggingConfig,
    pub theme: Theme,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl From<SiteConfigInner> for SiteConfig {
    fn from(inner: SiteConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Where static assets live and where the exporter writes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub public_dir: PathBuf,
    pub export_dir: PathBuf,
}

/// Document metadata shared by every page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub name: String,
    pub team: String,
    pub title: String,
    pub description: String,
    pub lang: String,
    /// Absolute origin used in the sitemap, without a trailing slash.
    pub base_url: String,
}

impl SiteMeta {
    /// `base_url` joined with a site-relative path.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// JSON records for the file output.
    pub json: bool,
    /// Enables rolling file logs in this directory.
    pub directory: Option<PathBuf>,
    /// Explicit directives, e.g. `ocean_server=debug,tower_http=info`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { public_dir: PathBuf::from("public"), export_dir: PathBuf::from("dist") }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Deep Ocean".to_owned(),
            team: "Chifrijo Cósmico".to_owned(),
            title: "Deep Ocean - Chifrijo Cósmico".to_owned(),
            description:
                "Exploring the depths of our oceans using cutting-edge VR technology and NASA data"
                    .to_owned(),
            lang: "en".to_owned(),
            base_url: "http://localhost:4583".to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None, filter: None }
    }
}
