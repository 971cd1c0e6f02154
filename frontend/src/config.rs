use log::Level;

pub const BRAND_NAME: &str = "NOBRU Buffet";

pub const WHATSAPP_NUMBER: &str = "5511999999999";
pub const CONTACT_PHONE_DISPLAY: &str = "(11) 99999-9999";
pub const CONTACT_PHONE_HREF: &str = "tel:+5511999999999";
pub const CONTACT_EMAIL: &str = "contato@nobrubuffet.com.br";
pub const CONTACT_LOCATION: &str = "Rio de Janeiro, RJ";

/// Latency of the simulated lead submission.
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;
/// How long the "request received" panel stays up before the form resets.
pub const ACKNOWLEDGMENT_WINDOW_MS: u32 = 3_000;
pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;
/// Delay between closing the mobile menu and scrolling to the chosen section.
pub const MENU_SCROLL_DELAY_MS: u32 = 100;
/// Delay before scrolling back to the portfolio grid after "Ver Menos".
pub const PORTFOLIO_COLLAPSE_SCROLL_DELAY_MS: u32 = 100;
/// Lets the service modal finish closing before the page scrolls away.
pub const MODAL_SCROLL_DELAY_MS: u32 = 250;

pub const NAVBAR_SCROLLED_OFFSET: f64 = 50.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
