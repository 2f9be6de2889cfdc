// src/main.rs — John Teidi ministry site (Rust + Yew + WASM)
use gloo::console::error;

mod app;
mod config;
mod content;
mod fallback;
mod icons;
mod nav;
mod sections;

use app::{App, AppProps, Unavailable};
use content::SiteContent;

fn main() {
    match SiteContent::embedded() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps::from(content)).render();
        }
        Err(e) => {
            error!(format!("site content failed to load: {e}"));
            yew::Renderer::<Unavailable>::new().render();
        }
    }
}
