//! Folio FX entry point
//!
//! On the web this attaches every effect to the page. Natively there is no
//! DOM, so it only reports the configuration it would use.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Folio FX starting...");
    match folio_fx::page::start() {
        Ok(()) => log::info!("Folio FX running!"),
        Err(e) => log::error!("Folio FX failed to start: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Folio FX (native) starting...");
    log::info!("Effects need a browser DOM - build for wasm32 with `trunk serve`");

    let settings = folio_fx::Settings::load();
    log::info!("Settings: {:?}", settings);
    for line in &folio_fx::banner::WELCOME {
        println!("{}", line.text);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
