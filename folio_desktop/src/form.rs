//! Contact-form draft state.

use folio_core::validation::ContactSubmission;

/// Text drafts for the contact form plus the in-flight submission flag.
///
/// Validation failures leave the drafts untouched; only a completed
/// (simulated) send clears them.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sending: bool,
}

impl ContactFormState {
    /// Snapshot of the drafts for validation.
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Clears the fields after a successful send.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_mirrors_drafts() {
        let form = ContactFormState {
            name: "Alice".into(),
            email: "alice@x.com".into(),
            message: "Hello there, nice site!".into(),
            sending: false,
        };
        let submission = form.submission();
        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.email, "alice@x.com");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_reset_clears_fields_only() {
        let mut form = ContactFormState {
            name: "Alice".into(),
            email: "alice@x.com".into(),
            message: "Hello there, nice site!".into(),
            sending: true,
        };
        form.reset();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        // The in-flight flag is owned by the submit handler.
        assert!(form.sending);
    }
}
