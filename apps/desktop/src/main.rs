#![windows_subsystem = "windows"]

use anyhow::Context;
use seva::domain::config::ClientConfig;
use seva::kernel::api::ApiClient;
use seva::kernel::config::load_config;
use seva_desktop::{App, DesktopApp};
use seva_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cfg: ClientConfig =
        load_config(Some("seva")).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .env_filter(cfg.logging.level.clone())
        .init_with_directory(cfg.logging.directory.as_deref(), cfg.logging.json)?;

    let client = ApiClient::new(&cfg.api).context("Building the REST client")?;
    tracing::info!(api = client.base_url(), "Starting desktop client");

    DesktopApp::new().launch(cfg, client, App);
    Ok(())
}
