use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::scroll::scroll_to_section;
use crate::sections::clients::ClientsSection;
use crate::sections::contact::ContactSection;
use crate::sections::differentiators::DifferentiatorsSection;
use crate::sections::hero::HeroSection;
use crate::sections::portfolio::PortfolioSection;
use crate::sections::services::ServicesSection;

#[function_component(Index)]
pub fn index() -> Html {
    let view_portfolio = Callback::from(|_: ()| scroll_to_section("#portfolio"));

    html! {
        <main class="page">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body { margin: 0; }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-links { display: flex; gap: 2.5rem; list-style: none; }
                    .burger-menu { display: none; }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .modal-backdrop, .lightbox-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .modal-card {
                        max-width: 56rem;
                        max-height: 90vh;
                        overflow-y: auto;
                    }
                    .image-carousel { position: relative; aspect-ratio: 16 / 9; overflow: hidden; }
                    .carousel-image { width: 100%; height: 100%; object-fit: cover; }
                    .date-picker { position: relative; }
                    .date-picker-backdrop { position: fixed; inset: 0; z-index: 40; }
                    .date-picker-popover { position: absolute; z-index: 50; }
                    .calendar-head, .calendar-row { display: grid; grid-template-columns: repeat(7, 2.25rem); }
                    .day-disabled { cursor: not-allowed; opacity: 0.3; }
                    .portfolio-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
                    .marquee { overflow: hidden; }
                    .marquee-track {
                        display: flex;
                        gap: 4rem;
                        width: fit-content;
                        animation: infinite-scroll 40s linear infinite;
                    }
                    .client-slot { flex-shrink: 0; width: 10rem; height: 5rem; }
                    @keyframes infinite-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(var(--scroll-distance)); }
                    }
                    @media (max-width: 767px) {
                        .nav-links { display: none; }
                        .burger-menu { display: block; }
                        .top-nav.menu-open { opacity: 0; pointer-events: none; }
                    }
                "#}
            </style>
            <Navbar />
            <HeroSection />
            <DifferentiatorsSection />
            <ServicesSection on_view_portfolio={view_portfolio} />
            <PortfolioSection />
            <ClientsSection />
            <ContactSection />
        </main>
    }
}
