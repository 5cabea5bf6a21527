use ocean_kernel::config::{ConfigError, ConfigLoader, validate};
use ocean_domain::config::SiteConfig;
use std::fs;
use tempfile::tempdir;

const SITE_TOML: &str = r##"
[server]
port = 8080

[site]
base_url = "https://deep-ocean.example"

[logging]
level = "debug"

[theme.palette]
gunmetal = "#023040"
"##;

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("site.toml");
    fs::write(&path, SITE_TOML)?;

    let cfg: SiteConfig = ConfigLoader::new().file(&path).env_overrides(no_env()).load()?;

    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.site.base_url, "https://deep-ocean.example");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.theme.palette.gunmetal, "#023040");
    assert_eq!(cfg.theme.palette.platinum, "#e8f3f2");
    assert_eq!(cfg.site.name, "Deep Ocean");
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("site.toml");
    fs::write(&path, SITE_TOML)?;

    let cfg: SiteConfig = ConfigLoader::new()
        .file(&path)
        .env_overrides([
            ("OCEAN__SERVER__PORT", "9090"),
            ("OCEAN__STORAGE__PUBLIC_DIR", "/srv/public"),
            ("OCEAN__THEME__TEXT__MUTED", "#aaaaaa"),
        ])
        .load()?;

    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.storage.public_dir, std::path::PathBuf::from("/srv/public"));
    assert_eq!(cfg.theme.text.muted, "#aaaaaa");
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let result: Result<SiteConfig, _> =
        ConfigLoader::new().file(dir.path().join("absent.toml")).env_overrides(no_env()).load();

    assert!(matches!(result, Err(ConfigError::Config { .. })));
}

#[test]
fn defaults_apply_without_any_file() -> Result<(), ConfigError> {
    let cfg: SiteConfig = ConfigLoader::new().env_overrides(no_env()).load()?;
    assert_eq!(cfg.server.port, 4583);
    validate(&cfg)
}

#[test]
fn validation_rejects_stylesheet_injection() {
    let mut cfg = SiteConfig::default();
    cfg.theme.border.subtle = "red } body { display: none".to_owned();

    let err = validate(&cfg).unwrap_err();
    assert!(err.to_string().contains("--border-subtle"), "{err}");
}

#[test]
fn validation_rejects_relative_base_url() {
    let mut cfg = SiteConfig::default();
    cfg.site.base_url = "deep-ocean.example".to_owned();

    assert!(matches!(validate(&cfg), Err(ConfigError::Invalid { .. })));
}
