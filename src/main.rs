mod components;
mod config;
mod logging;
mod model;
mod panel;
mod state;

use components::App;

fn main() {
    logging::init(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
