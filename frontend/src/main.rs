use log::info;
use yew::prelude::*;

mod backdrop;
mod config;
mod content;
mod market_chart;
mod nav;
mod on_screen;
mod scroll_spy;
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting {}", content::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
