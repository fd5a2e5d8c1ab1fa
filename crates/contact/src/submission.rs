use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::sanitize::{escape_html, normalize_email};

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid or missing required fields.")]
    Validation(#[from] validator::ValidationErrors),
}

/// Wire payload of `POST /api/contact`.
///
/// The server re-validates even though the client already ran the field
/// validators: the payload may not have come from our form at all. The
/// email check here is stricter than the client's regex.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInput {
    #[validate(length(min = 2))]
    pub first_name: String,
    #[validate(length(min = 2))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 10))]
    pub message: String,
}

impl SubmitInput {
    /// Trim every field and enforce the server-side rules, producing the
    /// entity the rest of the pipeline works with.
    pub fn validated(self) -> Result<ContactSubmission, ContactError> {
        let input = SubmitInput {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            message: self.message.trim().to_string(),
        };
        input.validate()?;

        Ok(ContactSubmission {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            message: input.message,
        })
    }
}

/// One user-initiated contact form submission.
///
/// Constructed transiently per request and discarded once dispatch
/// completes or fails; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Escape free text and normalize the email so the values are safe
    /// to embed in an outbound message body.
    pub fn sanitized(&self) -> SanitizedSubmission {
        SanitizedSubmission {
            first_name: escape_html(&self.first_name),
            last_name: escape_html(&self.last_name),
            email: normalize_email(&self.email),
            phone: match &self.phone {
                Some(p) => escape_html(p),
                None => "N/A".to_string(),
            },
            message: escape_html(&self.message),
        }
    }
}

/// A submission after sanitization, ready for message composition.
#[derive(Debug, Clone)]
pub struct SanitizedSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl SanitizedSubmission {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> SubmitInput {
        SubmitInput {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("5551234567".to_string()),
            message: "Hello, this is a test message.".to_string(),
        }
    }

    #[test]
    fn valid_input_becomes_a_submission() {
        let submission = valid_input().validated().unwrap();
        assert_eq!(submission.first_name, "Jane");
        assert_eq!(submission.phone.as_deref(), Some("5551234567"));
    }

    #[test]
    fn short_name_and_bad_email_are_rejected() {
        let input = SubmitInput {
            first_name: "J".to_string(),
            email: "bad-email".to_string(),
            message: "short".to_string(),
            ..valid_input()
        };
        assert!(input.validated().is_err());
    }

    #[test]
    fn fields_are_trimmed_and_blank_phone_dropped() {
        let input = SubmitInput {
            first_name: "  Jane ".to_string(),
            phone: Some("   ".to_string()),
            ..valid_input()
        };
        let submission = input.validated().unwrap();
        assert_eq!(submission.first_name, "Jane");
        assert!(submission.phone.is_none());
    }

    #[test]
    fn sanitized_escapes_markup_and_fills_missing_phone() {
        let submission = SubmitInput {
            first_name: "<Jane>".to_string(),
            phone: None,
            message: "Hello <b>there</b> friend".to_string(),
            ..valid_input()
        }
        .validated()
        .unwrap();

        let clean = submission.sanitized();
        assert_eq!(clean.first_name, "&lt;Jane&gt;");
        assert_eq!(clean.phone, "N/A");
        assert_eq!(clean.message, "Hello &lt;b&gt;there&lt;&#x2F;b&gt; friend");
        assert_eq!(clean.full_name(), "&lt;Jane&gt; Doe");
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_value(valid_input().validated().unwrap()).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["phone"], "5551234567");
    }
}
