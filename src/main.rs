mod api;
mod components;
mod config;
mod error;
mod image_url;
mod model;
mod quiz;
mod routes;
mod state;
mod util;

use components::app::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}
