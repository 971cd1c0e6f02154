use yew::prelude::*;

use crate::config;
use crate::links;
use crate::scroll::scroll_to_section;

const CONTACT_MESSAGE: &str = "Olá! Gostaria de saber mais sobre os serviços do NOBRU Buffet.";

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let contact_info = [
        ("Telefone", config::CONTACT_PHONE_DISPLAY, config::CONTACT_PHONE_HREF.to_string()),
        ("Email", config::CONTACT_EMAIL, format!("mailto:{}", config::CONTACT_EMAIL)),
        ("Localização", config::CONTACT_LOCATION, "#".to_string()),
    ];

    let open_whatsapp = Callback::from(|_: MouseEvent| links::open_whatsapp(CONTACT_MESSAGE));
    let back_to_form = Callback::from(|_: MouseEvent| scroll_to_section("#inicio"));

    html! {
        <section id="contato" class="section section-silver">
            <div class="section-header">
                <span class="eyebrow">{"Entre em Contato"}</span>
                <h2>{"Vamos criar algo especial juntos"}</h2>
            </div>
            <div class="contact-grid">
                <div class="contact-details">
                    <p>
                        {"Estamos prontos para transformar seu evento em uma experiência inesquecível. Entre em contato e descubra como podemos tornar seu momento especial ainda mais memorável."}
                    </p>
                    { for contact_info.iter().map(|(label, value, href)| html! {
                        <a class="contact-entry" href={href.clone()}>
                            <p class="contact-label">{*label}</p>
                            <p class="contact-value">{*value}</p>
                        </a>
                    }) }
                </div>
                <div class="contact-actions">
                    <button class="button-whatsapp" onclick={open_whatsapp}>{"Falar no WhatsApp"}</button>
                    <button class="button-outline" onclick={back_to_form}>{"Solicitar Orçamento"}</button>
                </div>
            </div>
        </section>
    }
}
