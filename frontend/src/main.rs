use crate::app::App;

mod app;
mod components;
mod helpers;

fn main() {
    gloo_console::log!("comment box frontend starting");
    yew::Renderer::<App>::new().render();
}
