//! Contact-form validation.
//!
//! Three rules, checked in order; the first failure wins and its
//! `Display` string is shown to the user verbatim as a toast.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Minimum accepted name length, in characters.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum accepted message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

lazy_static! {
    // local@domain.tld, no whitespace, exactly one @.
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid name")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Returns true for addresses shaped like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The three contact-form fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks name, then email, then message.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("has space@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_short_name_rejected() {
        let result = submission("A", "alice@x.com", "Hello there, nice site!").validate();
        assert_eq!(result, Err(ValidationError::NameTooShort));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Please enter a valid name"
        );
    }

    #[test]
    fn test_bad_email_rejected_after_name() {
        let result = submission("Alice", "alice@x", "Hello there, nice site!").validate();
        assert_eq!(result, Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_short_message_rejected() {
        let result = submission("Alice", "alice@x.com", "Too short").validate();
        assert_eq!(result, Err(ValidationError::MessageTooShort));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn test_message_boundary() {
        assert!(submission("Alice", "alice@x.com", "0123456789").validate().is_ok());
        assert_eq!(
            submission("Alice", "alice@x.com", "012345678").validate(),
            Err(ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_valid_submission() {
        assert!(submission("Alice", "alice@x.com", "Hello there, nice site!")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // Everything is wrong; the name error is reported.
        let result = submission("", "nope", "short").validate();
        assert_eq!(result, Err(ValidationError::NameTooShort));
    }
}
