//! Form Validation
//!
//! Payload checks run by the outer layer before a draft or record reaches a
//! collection. Collections never validate.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::store::Entity;

const SLUG_MIN: usize = 3;
const SLUG_MAX: usize = 60;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 64;
const PASSWORD_SPECIALS: &str = "@$!%*?&";

pub trait Validate {
    /// Check every field, reporting all failures at once.
    ///
    /// # Errors
    ///
    /// Returns the failing fields.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid payload: {}", join(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates field failures.
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &'static str, message: String) -> &mut Self {
        self.errors.push(FieldError { field, message });
        self
    }

    pub fn min_len(&mut self, field: &'static str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            return self.fail(field, format!("must have at least {min} characters"));
        }

        self
    }

    pub fn max_len(&mut self, field: &'static str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            return self.fail(field, format!("must not exceed {max} characters"));
        }

        self
    }

    pub fn min_value(&mut self, field: &'static str, value: u64, min: u64) -> &mut Self {
        if value < min {
            return self.fail(field, format!("must be at least {min}"));
        }

        self
    }

    pub fn slug(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.min_len(field, value, SLUG_MIN)
            .max_len(field, value, SLUG_MAX);

        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return self.fail(
                field,
                "can only contain lowercase letters, numbers, and hyphens".to_string(),
            );
        }

        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !is_email(value) {
            return self.fail(field, "must be a valid email address".to_string());
        }

        self
    }

    pub fn password(&mut self, field: &'static str, value: &str) -> &mut Self {
        let length = value.chars().count();

        if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
            return self.fail(
                field,
                format!("must be between {PASSWORD_MIN} and {PASSWORD_MAX} characters"),
            );
        }

        let allowed = value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));

        let complete = value.chars().any(|c| c.is_ascii_lowercase())
            && value.chars().any(|c| c.is_ascii_uppercase())
            && value.chars().any(|c| c.is_ascii_digit())
            && value.chars().any(|c| PASSWORD_SPECIALS.contains(c));

        if !allowed || !complete {
            return self.fail(
                field,
                format!(
                    "must contain an uppercase letter, a lowercase letter, a number and one of {PASSWORD_SPECIALS}"
                ),
            );
        }

        self
    }

    /// Optional phone number: empty, or 8 to 9 digits.
    pub fn phone(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.is_empty() {
            return self;
        }

        let digits = value.chars().all(|c| c.is_ascii_digit());

        if !digits || !(8..=9).contains(&value.len()) {
            return self.fail(field, "must be 8 or 9 digits".to_string());
        }

        self
    }

    /// # Errors
    ///
    /// Returns every recorded failure.
    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: std::mem::take(&mut self.errors),
            })
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validate a full record through the draft view of its fields.
///
/// # Errors
///
/// Returns the failing fields, or a `record` error when the record does not
/// map onto a draft.
pub fn validate_record<E: Entity>(record: &E) -> Result<(), ValidationErrors> {
    let draft = serde_json::to_value(record)
        .and_then(serde_json::from_value::<E::Draft>)
        .map_err(|error| ValidationErrors::single("record", error.to_string()))?;

    draft.validate()
}
