use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use yew_hooks::use_window_size;

use crate::components::lightbox::{Lightbox, LightboxImage};
use crate::config;
use crate::scroll::scroll_to_section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Corporate,
    Drinks,
    Social,
    Cocktail,
}

impl Category {
    pub const FILTERS: [Category; 5] = [
        Category::All,
        Category::Corporate,
        Category::Drinks,
        Category::Social,
        Category::Cocktail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Todos",
            Category::Corporate => "Corporativos",
            Category::Drinks => "Drinks",
            Category::Social => "Sociais",
            Category::Cocktail => "Coquetel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub src: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub event: Option<&'static str>,
    pub location: Option<&'static str>,
    pub date: Option<&'static str>,
}

impl PortfolioItem {
    /// Credit line under the title; location and date fall back to the defaults.
    pub fn credit(&self) -> String {
        format!(
            "Buffet NOBRU | {} | {}",
            self.location.unwrap_or(DEFAULT_LOCATION),
            self.date.unwrap_or(DEFAULT_YEAR),
        )
    }

    pub fn lightbox_image(&self) -> LightboxImage {
        LightboxImage {
            src: AttrValue::from(self.src),
            title: AttrValue::from(self.title),
            event: self.event.map(AttrValue::from),
            location: self.location.map(AttrValue::from),
            date: self.date.map(AttrValue::from),
        }
    }
}

const DEFAULT_LOCATION: &str = "Rio de Janeiro";
const DEFAULT_YEAR: &str = "2024";

const fn item(
    id: u32,
    src: &'static str,
    title: &'static str,
    category: Category,
    event: Option<&'static str>,
    location: Option<&'static str>,
    date: Option<&'static str>,
) -> PortfolioItem {
    PortfolioItem { id, src, title, category, event, location, date }
}

pub const PORTFOLIO: [PortfolioItem; 12] = [
    item(1, "/assets/portfolio/corporativo-01.jpg", "Coffee break executivo", Category::Corporate, Some("Convenção anual"), Some("Centro"), Some("Março 2024")),
    item(2, "/assets/portfolio/corporativo-02.jpg", "Almoço corporativo", Category::Corporate, Some("Lançamento de produto"), Some("Barra da Tijuca"), Some("Agosto 2024")),
    item(3, "/assets/portfolio/corporativo-03.jpg", "Confraternização de fim de ano", Category::Corporate, None, Some("Botafogo"), Some("Dezembro 2023")),
    item(4, "/assets/portfolio/drinks-01.jpg", "Bar de drinks autorais", Category::Drinks, None, None, None),
    item(5, "/assets/portfolio/drinks-02.jpg", "Carta de gin tônica", Category::Drinks, Some("Casamento"), Some("Itaipava"), Some("Outubro 2024")),
    item(6, "/assets/portfolio/drinks-03.jpg", "Coquetelaria clássica", Category::Drinks, None, Some("Leblon"), None),
    item(7, "/assets/portfolio/sociais-01.jpg", "Mesa de aniversário", Category::Social, Some("Aniversário de 15 anos"), Some("Niterói"), Some("Junho 2024")),
    item(8, "/assets/portfolio/sociais-02.jpg", "Jantar de casamento", Category::Social, Some("Casamento"), Some("Petrópolis"), Some("Novembro 2023")),
    item(9, "/assets/portfolio/sociais-03.jpg", "Batizado ao ar livre", Category::Social, None, None, None),
    item(10, "/assets/portfolio/coquetel-01.jpg", "Volantes finos", Category::Cocktail, Some("Vernissage"), Some("Gávea"), Some("Maio 2024")),
    item(11, "/assets/portfolio/coquetel-02.jpg", "Finger food", Category::Cocktail, None, Some("Ibiúna"), None),
    item(12, "/assets/portfolio/coquetel-03.jpg", "Estação de canapés", Category::Cocktail, Some("Formatura"), None, Some("Janeiro 2024")),
];

pub fn filter_items(items: &[PortfolioItem], category: Category) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| category == Category::All || item.category == category)
        .copied()
        .collect()
}

pub fn initial_limit(is_desktop: bool) -> usize {
    if is_desktop {
        6
    } else {
        4
    }
}

/// New `show_all` value, plus the scroll delay when the grid collapses.
pub fn toggle_show_all(show_all: bool) -> (bool, Option<u32>) {
    if show_all {
        (false, Some(config::PORTFOLIO_COLLAPSE_SCROLL_DELAY_MS))
    } else {
        (true, None)
    }
}

/// Items shown before the visitor expands the grid.
pub fn visible_items(filtered: &[PortfolioItem], show_all: bool, limit: usize) -> &[PortfolioItem] {
    if show_all {
        filtered
    } else {
        &filtered[..filtered.len().min(limit)]
    }
}

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let active = use_state(|| Category::All);
    let show_all = use_state(|| false);
    let selected = use_state(|| None::<LightboxImage>);
    let is_lightbox_open = use_state(|| false);
    let (width, _) = use_window_size();

    let limit = initial_limit(width >= config::DESKTOP_MIN_WIDTH);
    let filtered = filter_items(&PORTFOLIO, *active);
    let displayed = visible_items(&filtered, *show_all, limit);
    let has_more = filtered.len() > limit;

    let choose_filter = |category: Category| {
        let active = active.clone();
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Portfolio filter: {}", category.label());
            active.set(category);
            show_all.set(false);
        })
    };

    let open_item = |item: PortfolioItem| {
        let selected = selected.clone();
        let is_lightbox_open = is_lightbox_open.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(Some(item.lightbox_image()));
            is_lightbox_open.set(true);
        })
    };

    let close_lightbox = {
        let is_lightbox_open = is_lightbox_open.clone();
        Callback::from(move |_: ()| is_lightbox_open.set(false))
    };

    let on_toggle = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| {
            let (next, scroll_delay) = toggle_show_all(*show_all);
            show_all.set(next);
            if let Some(delay) = scroll_delay {
                Timeout::new(delay, || scroll_to_section("#portfolio .portfolio-grid")).forget();
            }
        })
    };

    html! {
        <section id="portfolio" class="section section-depth">
            <div class="section-header">
                <span class="eyebrow">{"Nosso Portfólio"}</span>
                <h2>{"Momentos que transformamos em arte"}</h2>
            </div>

            <div class="portfolio-filters">
                { for Category::FILTERS.iter().map(|category| html! {
                    <button
                        class={classes!("filter-pill", (*category == *active).then(|| "active"))}
                        onclick={choose_filter(*category)}
                    >
                        {category.label()}
                    </button>
                }) }
            </div>

            <div class="portfolio-grid">
                { for displayed.iter().map(|item| {
                    let caption = item.lightbox_image().caption();
                    html! {
                        <div class="portfolio-item" key={item.id.to_string()} onclick={open_item(*item)}>
                            <img src={item.src} alt={item.title} loading="lazy" />
                            <div class="portfolio-overlay">
                                <h3>{item.title}</h3>
                                <p>{caption}</p>
                                <p class="portfolio-credit">{item.credit()}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>

            if has_more {
                <div class="portfolio-more">
                    <button class="button-outline" onclick={on_toggle}>
                        { if *show_all { "Ver Menos ↑" } else { "Veja Mais ↓" } }
                    </button>
                </div>
            }

            if filtered.is_empty() {
                <p class="portfolio-empty">{"Nenhum item encontrado nesta categoria."}</p>
            }

            <Lightbox
                is_open={*is_lightbox_open}
                on_close={close_lightbox}
                image={(*selected).clone()}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_everything() {
        assert_eq!(filter_items(&PORTFOLIO, Category::All).len(), PORTFOLIO.len());
    }

    #[test]
    fn filter_keeps_only_category() {
        let drinks = filter_items(&PORTFOLIO, Category::Drinks);
        assert!(!drinks.is_empty());
        assert!(drinks.iter().all(|item| item.category == Category::Drinks));
    }

    #[test]
    fn limit_depends_on_viewport() {
        assert_eq!(initial_limit(true), 6);
        assert_eq!(initial_limit(false), 4);
    }

    #[test]
    fn visible_items_respects_limit_until_expanded() {
        let all = filter_items(&PORTFOLIO, Category::All);
        assert_eq!(visible_items(&all, false, 4).len(), 4);
        assert_eq!(visible_items(&all, true, 4).len(), all.len());
        let few = filter_items(&PORTFOLIO, Category::Social);
        assert_eq!(visible_items(&few, false, 6).len(), few.len());
    }

    #[test]
    fn credit_line_falls_back_to_defaults() {
        let dated = PORTFOLIO.iter().find(|item| item.id == 1).unwrap();
        assert_eq!(dated.credit(), "Buffet NOBRU | Centro | Março 2024");
        let bare = PORTFOLIO.iter().find(|item| item.id == 4).unwrap();
        assert_eq!(bare.credit(), "Buffet NOBRU | Rio de Janeiro | 2024");
    }

    #[test]
    fn dated_items_carry_the_date_into_the_lightbox() {
        let dated = PORTFOLIO.iter().find(|item| item.id == 2).unwrap();
        assert_eq!(
            dated.lightbox_image().caption(),
            "Lançamento de produto | Barra da Tijuca | Agosto 2024"
        );
        assert!(PORTFOLIO.iter().any(|item| item.date.is_none()));
    }

    #[test]
    fn collapsing_scrolls_back_after_its_own_delay() {
        assert_eq!(toggle_show_all(false), (true, None));
        assert_eq!(
            toggle_show_all(true),
            (false, Some(config::PORTFOLIO_COLLAPSE_SCROLL_DELAY_MS))
        );
    }

    #[test]
    fn empty_category_yields_nothing() {
        let only_drinks: Vec<PortfolioItem> = filter_items(&PORTFOLIO, Category::Drinks);
        assert!(filter_items(&only_drinks, Category::Social).is_empty());
    }
}
