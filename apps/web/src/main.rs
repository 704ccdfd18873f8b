//! DevSearch web front end: Dioxus-powered search page.

use dioxus::prelude::*;

mod app;
mod search;
mod state;

use app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devsearch=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title("DevSearch")
                        .with_inner_size(LogicalSize::new(1100.0, 800.0))
                        .with_min_inner_size(LogicalSize::new(600.0, 400.0)),
                ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
