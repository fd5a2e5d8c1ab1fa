//! Pure per-field validators for the contact form.
//!
//! Each validator classifies a single raw field value; rendering the
//! outcome (helper text, field highlighting) is the presenter's job, so
//! these functions can be exercised without any UI.

use regex::Regex;
use std::sync::LazyLock;

static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]{2,}$").unwrap());
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").unwrap());

/// The five contact form fields, keyed by their wire/DOM identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Message,
    ];

    /// Display label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    /// Run the validator for this field against a raw value.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::FirstName | Field::LastName => validate_name(value),
            Field::Email => validate_email(value),
            Field::Phone => validate_phone(value),
            Field::Message => validate_message(value),
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Format,
    TooShort,
}

impl FieldError {
    /// User-facing helper text for this failure on the given field.
    pub fn message(&self, field: Field) -> String {
        match (self, field) {
            (FieldError::Required, f) => format!("{} is required.", f.label()),
            (FieldError::Format, Field::Email) => {
                "Please enter a valid email address.".to_string()
            }
            (FieldError::Format, Field::Phone) => "Phone must be 7-15 digits.".to_string(),
            (FieldError::Format, f) => {
                format!("{} should only contain letters and spaces.", f.label())
            }
            (FieldError::TooShort, _) => "Message must be at least 10 characters.".to_string(),
        }
    }
}

/// Letters, spaces, hyphens and apostrophes, at least two characters.
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !RE_NAME.is_match(value) {
        return Err(FieldError::Format);
    }
    Ok(())
}

/// Basic `local@domain.tld` shape; the server applies a stricter check.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !RE_EMAIL.is_match(value) {
        return Err(FieldError::Format);
    }
    Ok(())
}

/// Optional field: empty is valid, otherwise 7-15 digits with optional `+`.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    if !RE_PHONE.is_match(value) {
        return Err(FieldError::Format);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.chars().count() < 10 {
        return Err(FieldError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_spaces_hyphens_apostrophes() {
        for s in ["Jane", "Mary Jane", "O'Neill", "Smith-Jones", "de la Cruz"] {
            assert_eq!(validate_name(s), Ok(()), "expected {s:?} to be valid");
        }
    }

    #[test]
    fn name_rejects_empty_as_required() {
        assert_eq!(validate_name(""), Err(FieldError::Required));
        assert_eq!(validate_name("   "), Err(FieldError::Required));
    }

    #[test]
    fn name_rejects_digits_and_single_char_as_format() {
        assert_eq!(validate_name("J"), Err(FieldError::Format));
        assert_eq!(validate_name("J4ne"), Err(FieldError::Format));
        assert_eq!(validate_name("jane@"), Err(FieldError::Format));
    }

    #[test]
    fn email_requires_at_and_dot() {
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("a@b"), Err(FieldError::Format));
        assert_eq!(validate_email("a.b.com"), Err(FieldError::Format));
        assert_eq!(validate_email("a @b.com"), Err(FieldError::Format));
        assert_eq!(validate_email(""), Err(FieldError::Required));
    }

    #[test]
    fn phone_is_optional_and_bounded() {
        assert_eq!(validate_phone(""), Ok(()));
        assert_eq!(validate_phone("12345"), Err(FieldError::Format));
        assert_eq!(validate_phone("1234567"), Ok(()));
        assert_eq!(validate_phone("+123456789012345"), Ok(()));
        assert_eq!(validate_phone("+1234567890123456"), Err(FieldError::Format));
        assert_eq!(validate_phone("555-1234"), Err(FieldError::Format));
    }

    #[test]
    fn message_minimum_length() {
        assert_eq!(validate_message("exactly 10"), Ok(()));
        assert_eq!(validate_message("nine char"), Err(FieldError::TooShort));
        assert_eq!(validate_message(""), Err(FieldError::Required));
    }

    #[test]
    fn revalidating_a_valid_value_is_stable() {
        for _ in 0..3 {
            assert_eq!(Field::FirstName.validate("Jane"), Ok(()));
            assert_eq!(Field::Phone.validate(""), Ok(()));
        }
    }

    #[test]
    fn messages_carry_the_field_label() {
        assert_eq!(
            FieldError::Required.message(Field::FirstName),
            "First name is required."
        );
        assert_eq!(
            FieldError::Format.message(Field::LastName),
            "Last name should only contain letters and spaces."
        );
        assert_eq!(
            FieldError::Format.message(Field::Phone),
            "Phone must be 7-15 digits."
        );
    }
}
