use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::date_picker::DatePicker;
use crate::config;
use crate::lead_form::errors::FieldError;
use crate::lead_form::lifecycle::{submit_lead, SubmissionStatus};
use crate::lead_form::masking::{mask_name, mask_phone, Masked};
use crate::lead_form::state::{LeadFormAction, LeadFormState};
use crate::lead_form::validation::{validate_form, Field};
use crate::links;
use crate::scroll::scroll_to_section;

/// Shared by the date label and the picker's trigger button.
pub const DATE_FIELD_ID: &str = "date";

fn field_error(error: Option<FieldError>) -> Html {
    match error {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

/// A rejected keystroke leaves the virtual DOM unchanged, so the element
/// has to be rewritten directly or the bad character stays visible.
fn sync_input(input: &HtmlInputElement, masked: &Masked) {
    if input.value() != masked.value {
        input.set_value(&masked.value);
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let form = use_reducer(LeadFormState::default);

    // Submission and the acknowledgment window are driven by status changes.
    {
        let dispatcher = form.dispatcher();
        let snapshot = form.values.clone();
        use_effect_with_deps(
            move |status: &SubmissionStatus| {
                match status {
                    SubmissionStatus::Submitting => spawn_local(async move {
                        let outcome = submit_lead(&snapshot).await;
                        dispatcher.dispatch(LeadFormAction::Completed(outcome));
                    }),
                    SubmissionStatus::Acknowledged => spawn_local(async move {
                        TimeoutFuture::new(config::ACKNOWLEDGMENT_WINDOW_MS).await;
                        dispatcher.dispatch(LeadFormAction::WindowElapsed);
                    }),
                    _ => {}
                }
                || ()
            },
            form.status.clone(),
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let masked = mask_name(&form.values.name, &input.value());
            sync_input(&input, &masked);
            form.dispatch(LeadFormAction::Name(masked));
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let masked = mask_phone(&form.values.phone, &input.value());
            sync_input(&input, &masked);
            form.dispatch(LeadFormAction::Phone(masked));
        })
    };

    let on_guests = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadFormAction::Guests(input.value()));
        })
    };

    let on_location = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadFormAction::Location(input.value()));
        })
    };

    let on_date = {
        let form = form.clone();
        Callback::from(move |date: Option<NaiveDate>| form.dispatch(LeadFormAction::Date(date)))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(LeadFormAction::Submitted(validate_form(&form.values)));
        })
    };

    let to_services = Callback::from(|_: MouseEvent| scroll_to_section("#servicos"));

    let open_whatsapp = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            links::open_whatsapp(&links::lead_followup_message(&form.values.name, &form.values.phone));
        })
    };

    let values = &form.values;
    let errors = &form.errors;
    let status = &form.status;
    let input_class = |field: Field| classes!("form-input", errors.get(field).map(|_| "has-error"));

    html! {
        <section id="inicio" class="hero-section">
            <div class="hero-background">
                <img src="/assets/hero.jpg" alt="NOBRU Buffet - Experiências Gastronômicas" />
            </div>
            <div class="hero-grid">
                <div class="hero-copy">
                    <span class="eyebrow">{"Experiências Gastronômicas"}</span>
                    <h1>
                        {"Transformamos seus eventos em "}
                        <em>{"memórias"}</em>
                        {" inesquecíveis"}
                    </h1>
                    <p>
                        {"Com ingredientes selecionados e uma equipe apaixonada pela arte culinária, criamos experiências que encantam todos os sentidos."}
                    </p>
                    <div class="hero-actions">
                        <button class="button-primary" onclick={to_services.clone()}>{"Conheça Nossos Serviços"}</button>
                        <button class="button-outline" onclick={to_services}>{"Ver Cardápio"}</button>
                    </div>
                </div>

                <div class="lead-card">
                    if status.is_acknowledged() {
                        <div class="lead-success">
                            <h3>{"Recebemos seu pedido!"}</h3>
                            <p>{"Entraremos em contato em até 24h."}</p>
                            <button class="button-whatsapp" onclick={open_whatsapp}>{"Falar no WhatsApp"}</button>
                        </div>
                    } else {
                        <h3>{"Solicite um Orçamento"}</h3>
                        <p class="lead-subtitle">{"Preencha o formulário e entraremos em contato em até 24h"}</p>
                        {
                            if let Some(notice) = form.notice.as_ref() {
                                html! { <div class="form-notice">{notice.message()}</div> }
                            } else {
                                html! {}
                            }
                        }
                        <form onsubmit={on_submit}>
                            <div class="form-field">
                                <label for="name">{"Nome Completo *"}</label>
                                <input
                                    id="name"
                                    placeholder="Seu nome"
                                    class={input_class(Field::Name)}
                                    value={values.name.clone()}
                                    oninput={on_name}
                                />
                                { field_error(errors.get(Field::Name)) }
                            </div>

                            <div class="form-field">
                                <label for="phone">{"Telefone *"}</label>
                                <input
                                    id="phone"
                                    type="tel"
                                    placeholder="(00) 00000-0000"
                                    maxlength="15"
                                    class={input_class(Field::Phone)}
                                    value={values.phone.clone()}
                                    oninput={on_phone}
                                />
                                { field_error(errors.get(Field::Phone)) }
                            </div>

                            <div class="form-row">
                                <div class="form-field">
                                    <label for={DATE_FIELD_ID}>{"Data do Evento"}</label>
                                    <DatePicker
                                        id={DATE_FIELD_ID}
                                        value={values.event_date}
                                        on_change={on_date}
                                        error={errors.get(Field::EventDate).is_some()}
                                    />
                                    { field_error(errors.get(Field::EventDate)) }
                                </div>
                                <div class="form-field">
                                    <label for="guests">{"Convidados"}</label>
                                    <input
                                        id="guests"
                                        type="number"
                                        min="1"
                                        placeholder="100"
                                        class="form-input"
                                        value={values.guests.clone()}
                                        oninput={on_guests}
                                    />
                                </div>
                            </div>

                            <div class="form-field">
                                <label for="location">{"Local do Evento"}</label>
                                <input
                                    id="location"
                                    placeholder="Cidade ou endereço"
                                    class="form-input"
                                    value={values.location.clone()}
                                    oninput={on_location}
                                />
                            </div>

                            <button type="submit" class="button-submit" disabled={status.is_busy()}>
                                { if status.is_busy() { "Enviando..." } else { "Solicitar Orçamento" } }
                            </button>
                        </form>
                    }
                </div>
            </div>
        </section>
    }
}
