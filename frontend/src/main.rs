use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod helpers;
mod pages;
mod routes;

fn main() {
    gloo_console::log!("Iniciando registro académico");
    yew::Renderer::<App>::new().render();
}
