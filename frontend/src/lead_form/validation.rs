use std::collections::BTreeMap;

use chrono::{Days, Local, Months, NaiveDate};
use serde::Serialize;

use super::errors::FieldError;
use super::masking::{phone_digits, MIN_PHONE_DIGITS};

/// Snapshot of the lead form as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub event_date: Option<NaiveDate>,
    pub guests: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Phone,
    EventDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Sets or clears one field, leaving the others alone.
    pub fn update(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(err) => {
                self.0.insert(field, err);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }
}

/// Selectable window for the event date, derived from "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// `min` is tomorrow, `max` is the same calendar day two years ahead
    /// (Feb 29 clamps to Feb 28).
    pub fn from_today(today: NaiveDate) -> Self {
        let min = today.checked_add_days(Days::new(1)).unwrap_or(today);
        let max = today.checked_add_months(Months::new(24)).unwrap_or(min);
        Self { min, max }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }

    pub fn check(&self, date: NaiveDate) -> Result<(), FieldError> {
        if date < self.min {
            Err(FieldError::DateTooEarly)
        } else if date > self.max {
            Err(FieldError::DateTooLate)
        } else {
            Ok(())
        }
    }
}

pub fn validate_name(name: &str) -> Option<FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Some(FieldError::NameRequired)
    } else if trimmed.chars().count() < 2 {
        Some(FieldError::NameTooShort)
    } else {
        None
    }
}

pub fn validate_phone(phone: &str) -> Option<FieldError> {
    if phone.is_empty() {
        Some(FieldError::PhoneRequired)
    } else if phone_digits(phone).len() < MIN_PHONE_DIGITS {
        Some(FieldError::PhoneInvalid)
    } else {
        None
    }
}

/// Checks every field independently against bounds derived from `today`.
pub fn validate_form_on(values: &FormValues, today: NaiveDate) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.update(Field::Name, validate_name(&values.name));
    errors.update(Field::Phone, validate_phone(&values.phone));
    if let Some(date) = values.event_date {
        errors.update(Field::EventDate, DateBounds::from_today(today).check(date).err());
    }
    errors
}

pub fn validate_form(values: &FormValues) -> FormErrors {
    validate_form_on(values, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn values(name: &str, phone: &str, event_date: Option<NaiveDate>) -> FormValues {
        FormValues {
            name: name.to_string(),
            phone: phone.to_string(),
            event_date,
            ..FormValues::default()
        }
    }

    #[test]
    fn bounds_run_from_tomorrow_to_two_years_out() {
        let today = day(2026, 10, 16);
        let bounds = DateBounds::from_today(today);
        assert_eq!(bounds.min, day(2026, 10, 17));
        assert_eq!(bounds.max, day(2028, 10, 16));
        assert!(bounds.min > today);
        assert!(bounds.min <= bounds.max);
    }

    #[test]
    fn leap_day_bound_clamps() {
        let bounds = DateBounds::from_today(day(2028, 2, 29));
        assert_eq!(bounds.min, day(2028, 3, 1));
        assert_eq!(bounds.max, day(2030, 2, 28));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = DateBounds::from_today(day(2026, 1, 1));
        assert!(!bounds.contains(day(2026, 1, 1)));
        assert!(bounds.contains(bounds.min));
        assert!(bounds.contains(bounds.max));
        assert!(!bounds.contains(day(2028, 1, 2)));
        assert_eq!(bounds.check(day(2026, 1, 1)), Err(FieldError::DateTooEarly));
        assert_eq!(bounds.check(day(2028, 1, 2)), Err(FieldError::DateTooLate));
    }

    #[test]
    fn short_name_is_the_only_error() {
        let today = day(2026, 10, 16);
        let errors = validate_form_on(&values("A", "11999999999", Some(day(2026, 10, 17))), today);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameTooShort));
    }

    #[test]
    fn far_future_date_is_the_only_error() {
        let today = day(2026, 10, 16);
        let errors = validate_form_on(&values("Maria Silva", "119999999999", Some(day(2029, 10, 16))), today);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::EventDate), Some(FieldError::DateTooLate));
    }

    #[test]
    fn reports_every_failing_field_together() {
        let today = day(2026, 10, 16);
        let errors = validate_form_on(&values("  ", "", Some(today)), today);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(Field::Phone), Some(FieldError::PhoneRequired));
        assert_eq!(errors.get(Field::EventDate), Some(FieldError::DateTooEarly));
    }

    #[test]
    fn optional_fields_never_fail() {
        let today = day(2026, 10, 16);
        let mut form = values("Maria", "(11) 9999-9999", None);
        form.guests = "abc".to_string();
        form.location = "???".to_string();
        assert!(validate_form_on(&form, today).is_empty());
    }

    #[test]
    fn short_phone_is_invalid() {
        assert_eq!(validate_phone("(11) 9999"), Some(FieldError::PhoneInvalid));
        assert_eq!(validate_phone("(11) 99999-9999"), None);
    }

    #[test]
    fn validation_is_repeatable() {
        let today = day(2026, 10, 16);
        let form = values("J", "11", None);
        assert_eq!(validate_form_on(&form, today), validate_form_on(&form, today));
    }

    #[test]
    fn update_sets_and_clears() {
        let mut errors = FormErrors::new();
        errors.update(Field::Phone, Some(FieldError::PhoneInvalid));
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![(Field::Phone, FieldError::PhoneInvalid)]);
        errors.update(Field::Phone, None);
        assert!(errors.is_empty());
    }
}
