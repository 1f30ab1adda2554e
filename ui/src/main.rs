//! SKU Admin UI Entry Point
//!
//! This is the main entry point for the SKU admin WASM application.
//! It initializes logging and mounts the Leptos app to the DOM.

use leptos::*;
use sku_admin_ui::App;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    // Initialize WASM tracing
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(tracing::Level::DEBUG)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting SKU Admin UI");

    // Mount the app
    mount_to_body(|| view! { <App /> });
}
