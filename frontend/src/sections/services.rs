use log::info;
use yew::prelude::*;

use crate::components::service_modal::{ServiceDetails, ServiceModal};

pub const SERVICES: [ServiceDetails; 3] = [
    ServiceDetails {
        id: "corporativos",
        title: "Eventos Corporativos",
        description: "Coffee breaks, almoços executivos, coquetéis e confraternizações empresariais com o padrão que sua empresa merece.",
        full_description: Some("Oferecemos soluções completas para eventos corporativos, desde coffee breaks matinais até jantares executivos. Nossa equipe entende a importância de impressionar clientes e parceiros, por isso cada detalhe é cuidadosamente planejado. Trabalhamos com cardápios personalizados que refletem a identidade da sua empresa, sempre com ingredientes de primeira qualidade e apresentação impecável."),
        image: Some("/assets/servicos/corporativo-capa.jpg"),
        images: &[
            "/assets/servicos/corporativo-1.jpg",
            "/assets/servicos/corporativo-2.jpg",
            "/assets/servicos/corporativo-3.jpg",
            "/assets/servicos/corporativo-4.jpg",
        ],
    },
    ServiceDetails {
        id: "sociais",
        title: "Eventos Sociais",
        description: "Aniversários, batizados, formaturas e celebrações especiais com cardápios que encantam todos os convidados.",
        full_description: Some("Transformamos momentos especiais em memórias inesquecíveis. Seja um aniversário íntimo ou uma grande celebração, criamos cardápios que agradam a todos os paladares. Nossa experiência de 15 anos nos permite entender que cada evento social é único, e por isso oferecemos personalização completa, desde o menu até a decoração da mesa."),
        image: Some("/assets/servicos/social-1.jpg"),
        images: &[
            "/assets/servicos/social-1.jpg",
            "/assets/servicos/social-2.jpg",
            "/assets/servicos/social-3.jpg",
            "/assets/servicos/social-4.jpg",
        ],
    },
    ServiceDetails {
        id: "gastronomicas",
        title: "Experiências Gastronômicas",
        description: "Jantares particulares e menus degustação exclusivos. Uma jornada sensorial criada especialmente para você.",
        full_description: Some("Para os verdadeiros apreciadores da gastronomia, oferecemos experiências únicas e exclusivas. Nossos menus degustação são criados especialmente para cada ocasião, combinando sabores sofisticados com apresentação artística. Cada prato conta uma história, e nossa equipe está sempre pronta para criar momentos gastronômicos memoráveis em ambientes íntimos e elegantes."),
        image: Some("/assets/servicos/degustacao-1.jpg"),
        images: &[
            "/assets/servicos/degustacao-1.jpg",
            "/assets/servicos/degustacao-2.jpg",
            "/assets/servicos/degustacao-3.jpg",
            "/assets/servicos/degustacao-4.jpg",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    pub on_view_portfolio: Callback<()>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    let selected = use_state(|| None::<ServiceDetails>);
    let is_modal_open = use_state(|| false);

    let open_service = |service: ServiceDetails| {
        let selected = selected.clone();
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening service details: {}", service.title);
            selected.set(Some(service));
            is_modal_open.set(true);
        })
    };

    let close_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: ()| is_modal_open.set(false))
    };

    html! {
        <section id="servicos" class="section section-depth">
            <div class="section-header">
                <span class="eyebrow">{"Nossos Serviços"}</span>
                <h2>{"Soluções exclusivas para cada ocasião"}</h2>
            </div>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card" key={service.id}>
                        <div class="service-cover" onclick={open_service(*service)}>
                            <img src={service.image.unwrap_or_default()} alt={service.title} loading="lazy" />
                        </div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <button class="button-ghost" onclick={open_service(*service)}>{"Saiba mais →"}</button>
                    </div>
                }) }
            </div>
            <ServiceModal
                is_open={*is_modal_open}
                on_close={close_modal}
                on_view_portfolio={props.on_view_portfolio.clone()}
                service={*selected}
            />
        </section>
    }
}
