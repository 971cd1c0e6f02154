use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config;
use crate::scroll::{scroll_to_section, use_scroll_lock};

pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("Início", "#inicio"),
    ("Diferenciais", "#diferenciais"),
    ("Serviços", "#servicos"),
    ("Portfólio", "#portfolio"),
    ("Clientes", "#clientes"),
    ("Contato", "#contato"),
];

fn scrolled_past_threshold() -> bool {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .map_or(false, |y| y > config::NAVBAR_SCROLLED_OFFSET)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(scrolled_past_threshold);

    use_scroll_lock(*menu_open);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(scrolled_past_threshold());
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("Could not attach navbar scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    // Closing the menu releases the scroll lock first, then the page scrolls.
    let nav_click = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            if *menu_open {
                menu_open.set(false);
                Timeout::new(config::MENU_SCROLL_DELAY_MS, move || scroll_to_section(href)).forget();
            } else {
                scroll_to_section(href);
            }
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"), (*menu_open).then(|| "menu-open"))}>
                <div class="nav-content">
                    <Logo />
                    <ul class="nav-links">
                        { for NAV_ITEMS.iter().map(|(label, href)| html! {
                            <li>
                                <a href={*href} class="nav-link" onclick={nav_click(*href)}>{*label}</a>
                            </li>
                        }) }
                    </ul>
                    <button class="burger-menu" onclick={toggle_menu.clone()} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            if *menu_open {
                <div class="mobile-menu" onclick={toggle_menu.clone()}>
                    <button class="mobile-menu-close" onclick={toggle_menu} aria-label="Fechar menu">{"×"}</button>
                    <nav class="mobile-menu-nav" onclick={keep_open}>
                        <ul>
                            { for NAV_ITEMS.iter().map(|(label, href)| html! {
                                <li>
                                    <a href={*href} class="mobile-menu-link" onclick={nav_click(*href)}>{*label}</a>
                                </li>
                            }) }
                        </ul>
                    </nav>
                </div>
            }
        </>
    }
}
