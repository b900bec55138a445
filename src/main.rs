//! MailDeck - Email Template Gallery
//!
//! A desktop application for browsing, translating, and copying reusable email templates.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use maildeck::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("maildeck=info".parse().unwrap()))
        .init();

    info!("Starting MailDeck v{}", env!("CARGO_PKG_VERSION"));

    // Launch Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("MailDeck")
                    .with_inner_size(LogicalSize::new(1100.0, 780.0)),
            ),
        )
        .launch(App);
}
