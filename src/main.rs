use gloo_console::log;

mod components;
mod config;
mod effects;
mod pages;
mod utils;

use pages::portfolio::Portfolio;

fn main() {
    // Last-resort fault channel: uncaught panics land in the console instead
    // of dying silently inside the wasm runtime.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log!("Portfolio website loaded successfully!");
    log!("Designed and developed for Aditya Naman Soni");

    yew::Renderer::<Portfolio>::new().render();
}
