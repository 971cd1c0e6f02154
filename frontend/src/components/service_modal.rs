use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::image_carousel::ImageCarousel;
use crate::config;
use crate::links;
use crate::scroll::use_scroll_lock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceDetails {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: Option<&'static str>,
    pub image: Option<&'static str>,
    pub images: &'static [&'static str],
}

impl ServiceDetails {
    /// Gallery images, or the cover image alone when no gallery exists.
    pub fn carousel_images(&self) -> Vec<AttrValue> {
        if !self.images.is_empty() {
            self.images.iter().map(|src| AttrValue::from(*src)).collect()
        } else {
            self.image.map(AttrValue::from).into_iter().collect()
        }
    }

    pub fn long_description(&self) -> &'static str {
        self.full_description.unwrap_or(self.description)
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_view_portfolio: Callback<()>,
    pub service: Option<ServiceDetails>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    use_scroll_lock(props.is_open && props.service.is_some());

    let Some(service) = props.service.filter(|_| props.is_open) else {
        return html! {};
    };

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let view_portfolio = {
        let on_close = props.on_close.clone();
        let on_view_portfolio = props.on_view_portfolio.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            let on_view_portfolio = on_view_portfolio.clone();
            Timeout::new(config::MODAL_SCROLL_DELAY_MS, move || on_view_portfolio.emit(())).forget();
        })
    };

    let open_whatsapp = Callback::from(move |_: MouseEvent| {
        links::open_whatsapp(&links::service_inquiry_message(service.title));
    });

    let images = service.carousel_images();

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-card" onclick={keep_open}>
                <button class="modal-close" onclick={close} aria-label="Fechar">{"×"}</button>
                <h2>{service.title}</h2>
                if !images.is_empty() {
                    <ImageCarousel key={service.id} images={images} />
                }
                <p class="modal-description">{service.long_description()}</p>
                <div class="modal-actions">
                    <button class="button-primary" onclick={view_portfolio}>
                        {"Conhecer nosso Portfólio Completo"}
                    </button>
                    <button class="button-outline" onclick={open_whatsapp}>
                        {"Falar no WhatsApp"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: ServiceDetails = ServiceDetails {
        id: "x",
        title: "Coffee break",
        description: "Curto",
        full_description: None,
        image: Some("/assets/cover.jpg"),
        images: &[],
    };

    #[test]
    fn carousel_falls_back_to_cover_image() {
        assert_eq!(BARE.carousel_images(), vec![AttrValue::from("/assets/cover.jpg")]);
        let no_images = ServiceDetails { image: None, ..BARE };
        assert!(no_images.carousel_images().is_empty());
    }

    #[test]
    fn gallery_wins_over_cover() {
        let gallery = ServiceDetails { images: &["/a.jpg", "/b.jpg"], ..BARE };
        assert_eq!(gallery.carousel_images().len(), 2);
    }

    #[test]
    fn long_description_falls_back_to_summary() {
        assert_eq!(BARE.long_description(), "Curto");
    }
}
