#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod dom;
pub mod host;
pub mod logger;
pub mod paths;
pub mod test_bridge;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    if let Err(err) = bootstrap::boot() {
        log::error!("blogkit failed to start: {err}");
    }
}
