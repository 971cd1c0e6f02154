use yew::prelude::*;

use crate::config;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <a href="#inicio" class="logo">
            <img src="/assets/nobru-logo.png" alt={config::BRAND_NAME} class="logo-image" />
        </a>
    }
}
