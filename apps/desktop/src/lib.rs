//! # Seva Desktop
//!
//! Dioxus shell around the registration and directory slices. The [`Session`], the REST
//! [`ApiClient`] and the [`ClientConfig`] are provided as root contexts; every page reads
//! them with `use_context`.

mod app;
mod directory;
pub mod format;
mod wizard;

pub use crate::app::App;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use seva::domain::config::ClientConfig;
use seva::features::identity::Session;
use seva::kernel::api::ApiClient;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "Seva Trust".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, config: ClientConfig, client: ApiClient, root: fn() -> Element) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        let session = Session::new();
        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(config.clone()))
            .with_context_provider(move || Box::new(client.clone()))
            .with_context_provider(move || Box::new(session.clone()))
            .launch(root);
    }
}
