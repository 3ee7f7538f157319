//! # Seva Dev API
//!
//! A local stand-in for the REST backend the desktop client talks to. It speaks the same
//! envelope (`{ success, message, data | <resource> }`), keeps everything in memory and
//! starts with a seeded directory, so the registration and directory screens can be
//! exercised without the production service.
//!
//! ## Example
//! ```no_run
//! use seva_dev_api::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder().port(4590).build().run().await
//! }
//! ```

mod error;
mod handlers;
mod router;
mod state;
mod store;

pub use crate::error::{DevApiError, DevApiErrorExt};
pub use crate::state::{AppState, AppStateInner};
pub use crate::store::Store;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use seva::domain::config::DevApiConfig;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// A fluent builder for configuring the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: DevApiConfig,
    store: Option<Store>,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: DevApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub const fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Replaces the seeded store, e.g. with an empty one in tests.
    pub fn store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Server {
        let store = self.store.unwrap_or_else(Store::seeded);
        info!(
            address = %SocketAddr::new(self.cfg.server.address, self.cfg.server.port),
            latency_ms = self.cfg.server.latency_ms,
            "Initializing dev backend"
        );
        Server { state: AppState::new(self.cfg, store) }
    }
}

/// A fully initialized server ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application, for serving on a listener of the caller's choosing.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Serves until Ctrl+C or SIGTERM, then drains in-flight requests.
    ///
    /// # Errors
    /// Returns an error if the configured address cannot be bound.
    pub async fn run(self) -> Result<()> {
        let server = &self.state.config.server;
        let address = SocketAddr::new(server.address, server.port);
        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        info!("Starting HTTP server on http://{address}/api");
        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Waits for Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
