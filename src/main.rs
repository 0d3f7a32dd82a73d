mod app;
mod commands;
mod components;
mod console;
mod diagnosis;
mod pages;
mod session;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
