//! PicSeek Desktop — Dioxus-powered stock photo search.

use std::sync::Mutex;

use dioxus::prelude::*;
use picseek_core::provider::ProviderClient;

mod app;
mod results;
mod search;
mod state;

use app::App;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_CLIENT: Mutex<Option<ProviderClient>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("picseek=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Resolve provider credentials at startup (blocking) — store in Mutex, NOT in the signal
    let config = match picseek_core::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "cannot start without provider configuration");
            std::process::exit(1);
        }
    };
    let client = match ProviderClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to build provider client");
            std::process::exit(1);
        }
    };
    *INITIAL_CLIENT.lock().unwrap() = Some(client);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder, LogicalSize};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 250, 250, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("PicSeek")
                            .with_inner_size(LogicalSize::new(1100.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(760.0, 560.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
