use anyhow::Context;
use clap::Parser;
use ocean::Site;
use ocean::kernel::config::{load_site_config, validate};
use ocean::kernel::logging::init_logging;
use ocean_export::{ExportOptions, export};
use std::path::PathBuf;
use tracing::info;

/// Render the Deep Ocean site to static files.
#[derive(Debug, Parser)]
#[command(name = "ocean-export")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file; `site.toml` is used when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory [default: `storage.export_dir`].
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Public asset directory [default: `storage.public_dir`].
    #[arg(short, long)]
    public: Option<PathBuf>,

    /// Absolute origin for the sitemap and canonical links.
    #[arg(long)]
    base_url: Option<String>,

    /// Remove the output directory first.
    #[arg(long)]
    clean: bool,
}

#[ocean_runtime::main(lean)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg =
        load_site_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(base_url) = cli.base_url {
        cfg.site.base_url = base_url;
        validate(&cfg).context("Invalid --base-url")?;
    }

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let options = ExportOptions::new(cli.out.unwrap_or_else(|| cfg.storage.export_dir.clone()))
        .public_dir(cli.public.unwrap_or_else(|| cfg.storage.public_dir.clone()))
        .clean(cli.clean);

    let report = export(&Site::new(cfg), &options)?;
    info!(files = report.files.len(), assets = report.assets, "Static site ready");
    Ok(())
}
