use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::FieldError;

/// Letters, Latin-1 accented letters and whitespace. `×` and `÷` sit inside
/// the `À-ÿ` block but are not letters, so the ranges skip them.
static NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÖØ-öø-ÿ\s]*$").expect("name pattern is valid"));

pub const MAX_PHONE_DIGITS: usize = 11;
pub const MIN_PHONE_DIGITS: usize = 10;

/// What a keystroke does to the field's error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorChange {
    Set(FieldError),
    Clear,
    Keep,
}

impl ErrorChange {
    pub fn apply(self, current: Option<FieldError>) -> Option<FieldError> {
        match self {
            ErrorChange::Set(err) => Some(err),
            ErrorChange::Clear => None,
            ErrorChange::Keep => current,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Masked {
    pub value: String,
    pub error: ErrorChange,
}

pub fn is_valid_name(raw: &str) -> bool {
    NAME_CHARS.is_match(raw)
}

/// All-or-nothing: a single disallowed character rejects the whole new value.
pub fn mask_name(previous: &str, raw: &str) -> Masked {
    if is_valid_name(raw) {
        Masked {
            value: raw.to_string(),
            error: ErrorChange::Clear,
        }
    } else {
        log::debug!("Rejected name input with disallowed characters");
        Masked {
            value: previous.to_string(),
            error: ErrorChange::Set(FieldError::NameInvalidCharacters),
        }
    }
}

pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a digit string as `(DD) XXXXX-XXXX`, progressively.
/// Callers guarantee at most `MAX_PHONE_DIGITS` ASCII digits.
pub fn format_phone(digits: &str) -> String {
    match digits.len() {
        0..=2 => digits.to_string(),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

pub fn mask_phone(previous: &str, raw: &str) -> Masked {
    let digits = phone_digits(raw);
    if digits.len() > MAX_PHONE_DIGITS {
        return Masked {
            value: previous.to_string(),
            error: ErrorChange::Keep,
        };
    }

    let error = match digits.len() {
        0 => ErrorChange::Keep,
        n if n < MIN_PHONE_DIGITS => ErrorChange::Set(FieldError::PhoneInvalid),
        _ => ErrorChange::Clear,
    };

    Masked {
        value: format_phone(&digits),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_spaces_and_accents() {
        for input in ["", "Maria", "Maria Silva", "João Conceição", "Ângela  Müller", "ÿ"] {
            let masked = mask_name("prev", input);
            assert_eq!(masked.value, input);
            assert_eq!(masked.error, ErrorChange::Clear);
        }
    }

    #[test]
    fn rejects_whole_value_on_disallowed_character() {
        for input in ["Maria1", "Ana!", "José_", "a×b", "Zoë@home", "日本"] {
            let masked = mask_name("Mari", input);
            assert_eq!(masked.value, "Mari");
            assert_eq!(masked.error, ErrorChange::Set(FieldError::NameInvalidCharacters));
        }
    }

    #[test]
    fn phone_mask_by_digit_count() {
        assert_eq!(mask_phone("", "").value, "");
        assert_eq!(mask_phone("", "11").value, "11");
        assert_eq!(mask_phone("", "119").value, "(11) 9");
        assert_eq!(mask_phone("", "1199999").value, "(11) 99999");
        assert_eq!(mask_phone("", "11999999").value, "(11) 99999-9");
        assert_eq!(mask_phone("", "11999999999").value, "(11) 99999-9999");
    }

    #[test]
    fn phone_mask_strips_non_digits() {
        assert_eq!(mask_phone("", "+55 (11) 9-99").value, "(55) 11999");
    }

    #[test]
    fn phone_mask_is_idempotent() {
        for raw in ["", "1", "11", "119", "1199999", "11999999", "1199999999", "11999999999", "(11) 9a8b7"] {
            let once = mask_phone("", raw);
            let twice = mask_phone("", &once.value);
            assert_eq!(once, twice, "mask not idempotent for {raw:?}");
        }
    }

    #[test]
    fn twelfth_digit_is_ignored() {
        let masked = mask_phone("(11) 99999-9999", "119999999999");
        assert_eq!(masked.value, "(11) 99999-9999");
        assert_eq!(masked.error, ErrorChange::Keep);
    }

    #[test]
    fn live_phone_error_follows_digit_count() {
        assert_eq!(mask_phone("", "").error, ErrorChange::Keep);
        assert_eq!(mask_phone("", "119").error, ErrorChange::Set(FieldError::PhoneInvalid));
        assert_eq!(mask_phone("", "119999999").error, ErrorChange::Set(FieldError::PhoneInvalid));
        assert_eq!(mask_phone("", "1199999999").error, ErrorChange::Clear);
    }

    #[test]
    fn error_change_applies_to_slot() {
        let current = Some(FieldError::PhoneInvalid);
        assert_eq!(ErrorChange::Keep.apply(current), current);
        assert_eq!(ErrorChange::Clear.apply(current), None);
        assert_eq!(
            ErrorChange::Set(FieldError::NameInvalidCharacters).apply(None),
            Some(FieldError::NameInvalidCharacters)
        );
    }
}
