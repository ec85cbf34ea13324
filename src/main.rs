mod components;
mod feed;
mod input;
mod model;
mod presentation;
mod refresh;
mod state;
mod styles;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
