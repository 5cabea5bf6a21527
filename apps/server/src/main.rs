use anyhow::Context;
use ocean::kernel::config::load_site_config;
use ocean::kernel::logging::init_logging;
use ocean::server::health::mark_started;
use ocean_server::Server;

#[ocean_runtime::main(server)]
async fn main() -> anyhow::Result<()> {
    let cfg = load_site_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.logging)?;
    mark_started();

    Server::builder().config(cfg).build()?.run().await
}
