use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod flow;
mod lightbox;
mod styles;
mod typewriter;
mod visitor;
mod components {
    pub mod clock;
    pub mod counter;
    pub mod gallery;
    pub mod notification;
    pub mod popup;
    pub mod typewriter;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Global css={styles::GLOBAL_CSS} />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
