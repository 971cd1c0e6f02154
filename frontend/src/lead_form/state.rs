use std::rc::Rc;

use chrono::NaiveDate;
use log::{debug, info, warn};
use yew::Reducible;

use super::errors::{FieldError, LeadFormError};
use super::lifecycle::SubmissionStatus;
use super::masking::Masked;
use super::validation::{Field, FormErrors, FormValues};

/// Banner shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Blocked,
    Acknowledged,
    Failed(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Blocked => "Campos inválidos. Por favor, corrija os erros no formulário.",
            Notice::Acknowledged => "Orçamento solicitado! Entraremos em contato em até 24h.",
            Notice::Failed(reason) => reason,
        }
    }
}

pub enum LeadFormAction {
    Name(Masked),
    Phone(Masked),
    Date(Option<NaiveDate>),
    Guests(String),
    Location(String),
    /// Result of submit-time validation.
    Submitted(FormErrors),
    Completed(Result<(), LeadFormError>),
    WindowElapsed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFormState {
    pub values: FormValues,
    pub errors: FormErrors,
    pub status: SubmissionStatus,
    pub notice: Option<Notice>,
}

impl LeadFormState {
    fn set_error(&mut self, field: Field, error: Option<FieldError>) {
        self.errors.update(field, error);
        // The blocked banner goes away once nothing is left to fix.
        if self.errors.is_empty() && self.notice == Some(Notice::Blocked) {
            self.notice = None;
        }
    }

    fn submitted(&mut self, found: FormErrors) {
        match self.status.begin(&found) {
            Ok(next) => {
                self.errors = found;
                self.status = next;
                self.notice = None;
            }
            Err(LeadFormError::SubmitBlocked(count)) => {
                info!("Lead form blocked by {} invalid field(s)", count);
                for (field, error) in found.iter() {
                    debug!("{:?}: {}", field, error);
                }
                self.errors = found;
                self.notice = Some(Notice::Blocked);
            }
            Err(err) => warn!("Ignoring submit: {}", err),
        }
    }

    fn completed(&mut self, outcome: Result<(), LeadFormError>) {
        self.status = self.status.complete(outcome);
        match &self.status {
            SubmissionStatus::Acknowledged => self.notice = Some(Notice::Acknowledged),
            SubmissionStatus::Failed(reason) => {
                warn!("Lead submission failed: {}", reason);
                self.notice = Some(Notice::Failed(reason.clone()));
            }
            _ => {}
        }
    }
}

impl Reducible for LeadFormState {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadFormAction::Name(masked) => {
                let error = masked.error.apply(next.errors.get(Field::Name));
                next.values.name = masked.value;
                next.set_error(Field::Name, error);
            }
            LeadFormAction::Phone(masked) => {
                let error = masked.error.apply(next.errors.get(Field::Phone));
                next.values.phone = masked.value;
                next.set_error(Field::Phone, error);
            }
            LeadFormAction::Date(date) => {
                next.values.event_date = date;
                next.set_error(Field::EventDate, None);
            }
            LeadFormAction::Guests(guests) => next.values.guests = guests,
            LeadFormAction::Location(location) => next.values.location = location,
            LeadFormAction::Submitted(found) => next.submitted(found),
            LeadFormAction::Completed(outcome) => next.completed(outcome),
            LeadFormAction::WindowElapsed => {
                if self.status.is_acknowledged() {
                    return Rc::new(LeadFormState::default());
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead_form::masking::{mask_name, mask_phone};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reduce(state: LeadFormState, action: LeadFormAction) -> LeadFormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn with_errors(errors: &[(Field, FieldError)]) -> LeadFormState {
        let mut state = LeadFormState::default();
        for (field, error) in errors {
            state.errors.update(*field, Some(*error));
        }
        state
    }

    #[test]
    fn picking_a_date_clears_the_date_error() {
        let state = with_errors(&[(Field::EventDate, FieldError::DateTooEarly), (Field::Name, FieldError::NameRequired)]);
        let state = reduce(state, LeadFormAction::Date(Some(day(2026, 12, 1))));
        assert_eq!(state.values.event_date, Some(day(2026, 12, 1)));
        assert_eq!(state.errors.get(Field::EventDate), None);
        assert_eq!(state.errors.get(Field::Name), Some(FieldError::NameRequired));
    }

    #[test]
    fn field_error_clears_once_value_is_valid() {
        let state = with_errors(&[(Field::Name, FieldError::NameInvalidCharacters), (Field::Phone, FieldError::PhoneInvalid)]);

        let state = reduce(state, LeadFormAction::Phone(mask_phone("(11) 9999", "(11) 9999-99")));
        assert_eq!(state.errors.get(Field::Phone), Some(FieldError::PhoneInvalid));

        let state = reduce(state, LeadFormAction::Phone(mask_phone("(11) 9999-99", "(11) 9999-9999")));
        assert_eq!(state.values.phone, "(11) 99999-999");
        assert_eq!(state.errors.get(Field::Phone), None);

        let state = reduce(state, LeadFormAction::Name(mask_name("", "Maria")));
        assert_eq!(state.values.name, "Maria");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn rejected_keystroke_keeps_previous_value() {
        let mut state = LeadFormState::default();
        state.values.name = "Mari".to_string();
        let state = reduce(state, LeadFormAction::Name(mask_name("Mari", "Mari4")));
        assert_eq!(state.values.name, "Mari");
        assert_eq!(state.errors.get(Field::Name), Some(FieldError::NameInvalidCharacters));
    }

    #[test]
    fn acknowledgment_window_resets_the_whole_form() {
        let mut state = LeadFormState::default();
        state.values = FormValues {
            name: "Maria Silva".to_string(),
            phone: "(11) 99999-9999".to_string(),
            event_date: Some(day(2026, 12, 1)),
            guests: "80".to_string(),
            location: "Niterói".to_string(),
        };

        let state = reduce(state, LeadFormAction::Submitted(FormErrors::new()));
        assert!(state.status.is_busy());
        let state = reduce(state, LeadFormAction::Completed(Ok(())));
        assert!(state.status.is_acknowledged());
        assert_eq!(state.notice, Some(Notice::Acknowledged));

        let state = reduce(state, LeadFormAction::WindowElapsed);
        assert_eq!(state, LeadFormState::default());
        assert_eq!(state.values, FormValues::default());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn window_elapsed_outside_acknowledgment_changes_nothing() {
        let mut state = LeadFormState::default();
        state.values.name = "Maria".to_string();
        let after = reduce(state.clone(), LeadFormAction::WindowElapsed);
        assert_eq!(after, state);
    }

    #[test]
    fn blocked_notice_clears_when_every_field_is_fixed() {
        let state = LeadFormState::default();
        let mut found = FormErrors::new();
        found.update(Field::Name, Some(FieldError::NameRequired));
        found.update(Field::Phone, Some(FieldError::PhoneRequired));

        let state = reduce(state, LeadFormAction::Submitted(found));
        assert_eq!(state.status, SubmissionStatus::Editing);
        assert_eq!(state.notice, Some(Notice::Blocked));

        let state = reduce(state, LeadFormAction::Name(mask_name("", "Maria")));
        assert_eq!(state.notice, Some(Notice::Blocked));

        let state = reduce(state, LeadFormAction::Phone(mask_phone("", "11999999999")));
        assert!(state.errors.is_empty());
        assert_eq!(state.notice, None);
    }

    #[test]
    fn failed_submission_shows_reason_and_keeps_values() {
        let mut state = LeadFormState::default();
        state.values.name = "Maria".to_string();
        let state = reduce(state, LeadFormAction::Submitted(FormErrors::new()));
        let state = reduce(
            state,
            LeadFormAction::Completed(Err(LeadFormError::SubmissionFailed("offline".to_string()))),
        );
        assert!(matches!(state.status, SubmissionStatus::Failed(_)));
        assert!(matches!(&state.notice, Some(Notice::Failed(reason)) if reason.contains("offline")));
        assert_eq!(state.values.name, "Maria");
    }

    #[test]
    fn submit_while_busy_is_ignored() {
        let state = reduce(LeadFormState::default(), LeadFormAction::Submitted(FormErrors::new()));
        let mut found = FormErrors::new();
        found.update(Field::Name, Some(FieldError::NameRequired));
        let again = reduce(state.clone(), LeadFormAction::Submitted(found));
        assert_eq!(again, state);
    }
}
