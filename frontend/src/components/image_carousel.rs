use std::rc::Rc;

use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use yew_hooks::use_interval;

use crate::config;

pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
}

/// Slide position over a fixed number of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    pub current: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let current = match action {
            CarouselAction::Next => (self.current + 1) % self.len,
            CarouselAction::Previous => (self.current + self.len - 1) % self.len,
            CarouselAction::GoTo(index) if index < self.len => index,
            CarouselAction::GoTo(_) => self.current,
        };
        Rc::new(Self { current, len: self.len })
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub images: Vec<AttrValue>,
    #[prop_or(true)]
    pub auto_play: bool,
    #[prop_or(config::CAROUSEL_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let len = props.images.len();
    let state = use_reducer(|| CarouselState::new(len));

    {
        let state = state.clone();
        // 0 stops the interval
        let millis = if props.auto_play && len > 1 { props.interval_ms } else { 0 };
        use_interval(move || state.dispatch(CarouselAction::Next), millis);
    }

    if len == 0 {
        return html! {};
    }

    let current = state.current.min(len - 1);
    let previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Previous))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    html! {
        <div class="image-carousel">
            <img
                key={current.to_string()}
                src={props.images[current].clone()}
                alt={format!("Slide {}", current + 1)}
                class="carousel-image"
            />
            if len > 1 {
                <button class="carousel-nav carousel-prev" onclick={previous} aria-label="Imagem anterior">{"‹"}</button>
                <button class="carousel-nav carousel-next" onclick={next} aria-label="Próxima imagem">{"›"}</button>
                <div class="carousel-dots">
                    { for (0..len).map(|index| {
                        let state = state.clone();
                        html! {
                            <button
                                class={classes!("carousel-dot", (index == current).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(index)))}
                                aria-label={format!("Ir para slide {}", index + 1)}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(state: CarouselState, action: CarouselAction) -> CarouselState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let state = CarouselState::new(3);
        let state = step(state, CarouselAction::Previous);
        assert_eq!(state.current, 2);
        let state = step(state, CarouselAction::Next);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let state = step(CarouselState::new(4), CarouselAction::GoTo(3));
        assert_eq!(state.current, 3);
        let state = step(state, CarouselAction::GoTo(9));
        assert_eq!(state.current, 3);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let state = step(CarouselState::new(0), CarouselAction::Next);
        assert_eq!(state.current, 0);
    }
}
