use log::warn;
use web_sys::window;

use crate::config;

pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

pub fn open_whatsapp(message: &str) {
    let url = whatsapp_link(message);
    match window() {
        Some(window) => {
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                warn!("Could not open WhatsApp link");
            }
        }
        None => warn!("No window to open WhatsApp link from"),
    }
}

pub fn lead_followup_message(name: &str, phone: &str) -> String {
    format!(
        "Olá! Solicitei um orçamento no site. Nome: {}, Telefone: {}",
        name, phone
    )
}

pub fn service_inquiry_message(service_title: &str) -> String {
    format!(
        "Olá! Gostaria de saber mais sobre {} do {}.",
        service_title,
        config::BRAND_NAME
    )
}
