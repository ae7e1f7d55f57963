//! Creation-form values, validation, and submit status.
//!
//! DESIGN
//! ======
//! Inputs stay as raw text so the form can round-trip whatever the user typed.
//! `ParcelForm::validate` is the single gate between text and the typed
//! `CreateParcelRequest`; pages never build requests by hand.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{CreateParcelRequest, ParcelType, ParcelTypeRecord};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const INVALID_PARCEL_TYPE: &str = "Select a valid parcel type.";
pub const NOT_A_NUMBER: &str = "Enter a number.";

/// Minimum name length, counted in UTF-16 code units.
const NAME_MIN_LENGTH: usize = 2;

/// Raw text of the creation form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParcelForm {
    pub name: String,
    pub weight: String,
    pub content_value: String,
    /// Selected category name; empty until the user picks one.
    pub parcel_type: String,
}

impl Default for ParcelForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            weight: "1".to_owned(),
            content_value: "1".to_owned(),
            parcel_type: String::new(),
        }
    }
}

/// Field-level validation messages. `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub weight: Option<&'static str>,
    pub content_value: Option<&'static str>,
    pub parcel_type: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.weight.is_none()
            && self.content_value.is_none()
            && self.parcel_type.is_none()
    }
}

impl ParcelForm {
    /// Validate every field and build the request payload.
    ///
    /// # Errors
    ///
    /// Returns the messages for every invalid field at once so the form can
    /// annotate all of them in one pass.
    pub fn validate(&self) -> Result<CreateParcelRequest, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.encode_utf16().count() < NAME_MIN_LENGTH {
            errors.name = Some(NAME_TOO_SHORT);
        }
        let weight = parse_float_prefix(&self.weight);
        if weight.is_none() {
            errors.weight = Some(NOT_A_NUMBER);
        }
        let content_value = parse_float_prefix(&self.content_value);
        if content_value.is_none() {
            errors.content_value = Some(NOT_A_NUMBER);
        }
        let parcel_type = self.parcel_type.parse::<ParcelType>().ok();
        if parcel_type.is_none() {
            errors.parcel_type = Some(INVALID_PARCEL_TYPE);
        }

        match (weight, content_value, parcel_type) {
            (Some(weight), Some(content_value), Some(parcel_type)) if errors.is_empty() => {
                Ok(CreateParcelRequest::new(self.name.clone(), weight, content_value, parcel_type))
            }
            _ => Err(errors),
        }
    }
}

/// Parse the longest leading decimal number, the way browsers parse loose
/// numeric text (`"2.5kg"` -> `2.5`, `"  7"` -> `7`, `"kg"` -> `None`).
///
/// Non-finite results are rejected since JSON cannot carry them.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Categories to offer in the type picker.
///
/// Keeps the known categories the service reports, in their canonical order.
/// Falls back to every known category when the service list is unavailable
/// or shares nothing with the client.
pub fn offered_parcel_types(records: &[ParcelTypeRecord]) -> Vec<ParcelType> {
    let offered: Vec<ParcelType> = ParcelType::ALL
        .into_iter()
        .filter(|kind| records.iter().any(|r| r.name == kind.as_str()))
        .collect();
    if offered.is_empty() {
        ParcelType::ALL.to_vec()
    } else {
        offered
    }
}

/// Lifecycle of the most recent create request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Status line shown under the form, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some("Submitting...".to_owned()),
            Self::Succeeded(message) => Some(message.clone()),
            Self::Failed(reason) => Some(format!("Could not create parcel: {reason}")),
        }
    }
}
