use log::debug;
use yew::prelude::*;

/// Logo box width plus the gap between logos, in pixels.
const LOGO_SLOT_PX: usize = 224;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Client {
    pub id: u32,
    pub name: &'static str,
    pub logo: Option<&'static str>,
}

pub const CLIENTS: [Client; 12] = [
    Client { id: 1, name: "Sawala", logo: Some("https://www.sawala.com.br/media/logo.png") },
    Client { id: 2, name: "Ilha Pura", logo: None },
    Client { id: 3, name: "Lopes", logo: Some("https://upload.wikimedia.org/wikipedia/commons/7/7c/Logo-Lopes-Consultoria-de-Imoveis-2020.png") },
    Client { id: 4, name: "Performance", logo: None },
    Client { id: 5, name: "Deugro", logo: None },
    Client { id: 6, name: "PetroHouse", logo: Some("https://petro-house.com/wp-content/uploads/2022/01/Petrohouse-Logotipo-Horizontal-Colorido-Positivo.png") },
    Client { id: 7, name: "Honda", logo: Some("https://1000logos.net/wp-content/uploads/2018/03/Honda-Logo-2000.png") },
    Client { id: 8, name: "Toyota", logo: None },
    Client { id: 9, name: "BYD", logo: None },
    Client { id: 10, name: "Casa Shopping", logo: None },
    Client { id: 11, name: "Jeep", logo: Some("https://upload.wikimedia.org/wikipedia/commons/0/0d/Jeep_logo.svg") },
    Client { id: 12, name: "RAM", logo: None },
];

/// Two back-to-back copies so the strip loops without a visible seam.
pub fn marquee_items(clients: &[Client]) -> Vec<Client> {
    clients.iter().chain(clients.iter()).copied().collect()
}

/// Horizontal distance after which the second copy sits where the first began.
pub fn scroll_distance(count: usize) -> usize {
    count * LOGO_SLOT_PX
}

#[derive(Properties, PartialEq)]
struct ClientLogoProps {
    client: Client,
}

#[function_component(ClientLogo)]
fn client_logo(props: &ClientLogoProps) -> Html {
    let failed = use_state(|| false);
    let client = props.client;

    match client.logo {
        Some(src) if !*failed => {
            let on_error = {
                let failed = failed.clone();
                Callback::from(move |_: Event| {
                    debug!("Logo for {} failed to load, showing name", client.name);
                    failed.set(true);
                })
            };
            html! { <img src={src} alt={client.name} loading="lazy" onerror={on_error} /> }
        }
        _ => html! { <span class="client-name">{client.name}</span> },
    }
}

#[function_component(ClientsSection)]
pub fn clients_section() -> Html {
    let items = marquee_items(&CLIENTS);
    let track_style = format!("--scroll-distance: -{}px;", scroll_distance(CLIENTS.len()));

    html! {
        <section id="clientes" class="section section-teal">
            <div class="section-header">
                <span class="eyebrow">{"Confiança"}</span>
                <h2>{"Clientes que confiam em nós"}</h2>
            </div>
            <div class="marquee">
                <div class="marquee-track" style={track_style}>
                    { for items.iter().enumerate().map(|(index, client)| html! {
                        <div class="client-slot" key={format!("{}-{}", client.id, index)}>
                            <ClientLogo client={*client} />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
