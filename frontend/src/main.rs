use yew::prelude::*;
use log::info;

mod config;
mod links;
mod scroll;
mod lead_form {
    pub mod errors;
    pub mod masking;
    pub mod validation;
    pub mod lifecycle;
    pub mod state;
}
mod components {
    pub mod logo;
    pub mod navbar;
    pub mod date_picker;
    pub mod image_carousel;
    pub mod lightbox;
    pub mod service_modal;
}
mod sections {
    pub mod hero;
    pub mod differentiators;
    pub mod services;
    pub mod portfolio;
    pub mod clients;
    pub mod contact;
}
mod pages {
    pub mod index;
}

use pages::index::Index;


#[function_component]
fn App() -> Html {
    html! {
        <Index />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
