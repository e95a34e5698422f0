use crate::app::App;

mod api;
mod app;
mod components;
mod scroll;
mod session;

fn main() {
    yew::Renderer::<App>::new().render();
}
