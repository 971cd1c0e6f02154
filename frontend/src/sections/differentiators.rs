use yew::prelude::*;

const DIFFERENTIATORS: [(&str, &str, &str); 3] = [
    (
        "leaf",
        "Ingredientes Selecionados",
        "Trabalhamos apenas com fornecedores locais e ingredientes frescos, garantindo qualidade e sabor em cada prato.",
    ),
    (
        "award",
        "Experiência de 15 Anos",
        "Mais de mil eventos realizados com excelência, desde encontros corporativos até grandes celebrações sociais.",
    ),
    (
        "heart",
        "Atendimento Personalizado",
        "Cada evento é único. Nossa equipe dedica atenção especial para entender e superar suas expectativas.",
    ),
];

#[function_component(DifferentiatorsSection)]
pub fn differentiators_section() -> Html {
    html! {
        <section id="diferenciais" class="section section-silver">
            <div class="section-header">
                <span class="eyebrow">{"Por Que Escolher"}</span>
                <h2>{"A arte de servir com excelência"}</h2>
            </div>
            <div class="card-grid">
                { for DIFFERENTIATORS.iter().map(|(icon, title, description)| html! {
                    <div class="differentiator">
                        <div class={classes!("icon-badge", format!("icon-{}", icon))}></div>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
