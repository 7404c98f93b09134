use gloo_console::log;
use log::{info, Level};
use web_sys::window;
use yew::prelude::*;

mod config;
mod components {
    pub mod nav;
    pub mod stat_counter;
}
mod contact;
mod effects;
mod pages {
    pub mod home;
}

use components::nav::Nav;
use effects::lazy_images::load_lazy_images;
use pages::home::Home;

fn print_greeting() {
    log!("%cNovaRegis", "font-size: 24px; font-weight: bold; color: #6366f1;");
    log!("%cAI and Software Service Agency", "font-size: 14px; color: #06b6d4;");
    log!(
        "%cInterested in working together? Visit our contact section!",
        "font-size: 12px; color: #a1a1aa;"
    );
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(document) = window().and_then(|w| w.document()) {
                load_lazy_images(&document);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Nav />
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
    print_greeting();
    yew::Renderer::<App>::new().render();
}
