use anyhow::Context;
use seva::domain::config::DevApiConfig;
use seva::kernel::config::load_config;
use seva_dev_api::Server;
use seva_logger::Logger;

#[seva_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: DevApiConfig =
        load_config(Some("dev-api")).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .env_filter(cfg.logging.level.clone())
        .init_with_directory(cfg.logging.directory.as_deref(), cfg.logging.json)?;

    Server::builder().config(cfg).build().run().await
}
