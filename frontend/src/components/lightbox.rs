use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::config;
use crate::scroll::use_scroll_lock;

#[derive(Debug, Clone, PartialEq)]
pub struct LightboxImage {
    pub src: AttrValue,
    pub title: AttrValue,
    pub event: Option<AttrValue>,
    pub location: Option<AttrValue>,
    pub date: Option<AttrValue>,
}

impl LightboxImage {
    /// `event | location | date`, falling back to the brand when undated.
    pub fn caption(&self) -> String {
        let mut caption = String::new();
        for part in [&self.event, &self.location].into_iter().flatten() {
            caption.push_str(part);
            caption.push_str(" | ");
        }
        match &self.date {
            Some(date) => caption.push_str(date),
            None => caption.push_str(config::BRAND_NAME),
        }
        caption
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub image: Option<LightboxImage>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    use_scroll_lock(props.is_open && props.image.is_some());

    let Some(image) = props.image.as_ref().filter(|_| props.is_open) else {
        return html! {};
    };

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox-backdrop" onclick={close.clone()}>
            <div class="lightbox-content" onclick={keep_open}>
                <button class="lightbox-close" onclick={close} aria-label="Fechar">{"×"}</button>
                <img src={image.src.clone()} alt={image.title.clone()} class="lightbox-image" />
                <div class="lightbox-caption">
                    <h3>{&image.title}</h3>
                    <p>{image.caption()}</p>
                </div>
            </div>
        </div>
    }
}
