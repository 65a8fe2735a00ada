//! Validation of the contact form before anything is sent to the server.

use std::{collections::BTreeMap, fmt};

use landing_models::{contact::ContactSubmission, email_address::EmailAddress};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Current content of the contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("too short")]
    TooShort,
    #[error("invalid format")]
    InvalidFormat,
}

/// First failure per field, keyed by the field it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Message shown below the input while the field is invalid.
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Informe seu nome completo.",
            Self::Email => "Informe um e-mail válido.",
            Self::Message => "Conte um pouco mais sobre o projeto.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Human readable message for `field`, if it is invalid.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|_| field.error_message())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }

    fn check(&mut self, field: Field, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.0.entry(field).or_insert(error);
        }
    }
}

/// Validates every field independently and returns all failures at once.
///
/// The phone number is never rejected and an empty phone number is not sent
/// at all.
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check(Field::Name, validate_name(&form.name));
    errors.check(Field::Email, validate_email(&form.email));
    errors.check(Field::Message, validate_message(&form.message));

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: form.name.clone(),
        email: form.email.clone(),
        phone: (!form.phone.is_empty()).then(|| form.phone.clone()),
        message: form.message.clone(),
    })
}

fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().chars().count() < NAME_MIN_CHARS {
        return Err(FieldError::TooShort);
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), FieldError> {
    if !EmailAddress::is_valid(email) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

fn validate_message(message: &str) -> Result<(), FieldError> {
    if message.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError::TooShort);
    }
    Ok(())
}
