//! # client
//!
//! Leptos + WASM frontend for the KenyaStay hotel and restaurant directory.
//!
//! Pages, components, and page-scoped state live here. Catalog records,
//! filters, and booking rules come from the framework-agnostic `catalog`
//! crate. Built with the `csr` feature and mounted straight into `<body>`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("kenyastay client starting");
    }
    leptos::mount::mount_to_body(app::App);
}
