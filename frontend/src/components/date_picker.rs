use chrono::{Datelike, Local, Months, NaiveDate};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::lead_form::validation::DateBounds;

const MONTH_NAMES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

const WEEKDAY_INITIALS: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

/// A calendar page. Ordered by (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::of(self.first_day() + Months::new(1))
    }

    pub fn previous(&self) -> Self {
        Self::of(self.first_day() - Months::new(1))
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        let next = first + Months::new(1);
        (next - first).num_days() as u32
    }

    /// Sunday-first rows; cells outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let lead = self.first_day().weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        cells.extend(
            (1..=self.days_in_month()).map(|day| NaiveDate::from_ymd_opt(self.year, self.month, day)),
        );
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|row| {
                let mut week = [None; 7];
                week.copy_from_slice(row);
                week
            })
            .collect()
    }
}

/// Things that can happen to the calendar popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverEvent {
    Trigger,
    OutsideClick,
    Picked(NaiveDate),
}

/// Whether the popover stays open after `event`. Picks outside `bounds` are ignored.
pub fn popover_open_after(open: bool, event: PopoverEvent, bounds: &DateBounds) -> bool {
    match event {
        PopoverEvent::Trigger => !open,
        PopoverEvent::OutsideClick => false,
        PopoverEvent::Picked(date) => open && !bounds.contains(date),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub value: Option<NaiveDate>,
    pub on_change: Callback<Option<NaiveDate>>,
    #[prop_or(AttrValue::from("dd/mm/aaaa"))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: bool,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let today = Local::now().date_naive();
    let bounds = DateBounds::from_today(today);
    let is_open = use_state(|| false);
    let view = use_state(|| MonthView::of(props.value.unwrap_or(bounds.min)));

    let earliest = MonthView::of(bounds.min);
    let latest = MonthView::of(bounds.max);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(popover_open_after(*is_open, PopoverEvent::Trigger, &bounds))
        })
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(popover_open_after(*is_open, PopoverEvent::OutsideClick, &bounds))
        })
    };

    let go_previous = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let previous = view.previous();
            if previous >= earliest {
                view.set(previous);
            }
        })
    };

    let go_next = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let next = view.next();
            if next <= latest {
                view.set(next);
            }
        })
    };

    let select = |date: NaiveDate| {
        let is_open = is_open.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if bounds.contains(date) {
                on_change.emit(Some(date));
            }
            is_open.set(popover_open_after(*is_open, PopoverEvent::Picked(date), &bounds));
        })
    };

    let render_cell = |cell: Option<NaiveDate>| match cell {
        None => html! { <span class="day day-empty"></span> },
        Some(date) => {
            let disabled = !bounds.contains(date);
            html! {
                <button
                    type="button"
                    class={classes!(
                        "day",
                        disabled.then(|| "day-disabled"),
                        (date == today).then(|| "day-today"),
                        (props.value == Some(date)).then(|| "day-selected"),
                    )}
                    disabled={disabled}
                    onclick={select(date)}
                >
                    {date.day()}
                </button>
            }
        }
    };

    html! {
        <div class="date-picker">
            <button
                type="button"
                id={props.id.clone()}
                class={classes!("date-picker-trigger", props.error.then(|| "has-error"))}
                onclick={toggle}
            >
                {
                    match props.value {
                        Some(date) => html! { <span class="date-value">{format_date(date)}</span> },
                        None => html! { <span class="date-placeholder">{&props.placeholder}</span> },
                    }
                }
            </button>
            if *is_open {
                <>
                <div class="date-picker-backdrop" onclick={close}></div>
                <div class="date-picker-popover">
                    <div class="calendar-caption">
                        <button type="button" class="calendar-nav" disabled={*view <= earliest} onclick={go_previous}>{"‹"}</button>
                        <span class="calendar-label">{view.label()}</span>
                        <button type="button" class="calendar-nav" disabled={*view >= latest} onclick={go_next}>{"›"}</button>
                    </div>
                    <div class="calendar-head">
                        { for WEEKDAY_INITIALS.iter().map(|d| html! { <span class="head-cell">{*d}</span> }) }
                    </div>
                    { for view.weeks().into_iter().map(|week| html! {
                        <div class="calendar-row">
                            { for week.into_iter().map(&render_cell) }
                        </div>
                    }) }
                </div>
                </>
            }
        </div>
    }
}
