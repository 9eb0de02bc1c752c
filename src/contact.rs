//! Contact form with simulated submission
//!
//! Nothing is sent anywhere: a valid submission waits a fixed delay, then
//! reports success and clears the fields.

use tracing::{debug, info};

use crate::constants::contact::{SUBMIT_DELAY_SECS, TOAST_SECS};
use crate::toast::Toast;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please tell me about your project.")]
    MissingMessage,
}

/// Loose `type=email` check: one `@`, something on both sides, no spaces
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FieldError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FieldError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Submitting { completes_at: f64 },
}

#[derive(Debug)]
pub struct ContactForm {
    pub fields: ContactFields,
    state: SubmitState,
    delay_secs: f64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SUBMIT_DELAY_SECS)
    }
}

impl ContactForm {
    pub fn new(delay_secs: f64) -> Self {
        Self {
            fields: ContactFields::default(),
            state: SubmitState::Idle,
            delay_secs,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    /// Start a submission; returns an error toast when the input is invalid
    pub fn submit(&mut self, now: f64) -> Option<Toast> {
        if self.is_submitting() {
            debug!("submission already in progress");
            return None;
        }
        if let Err(err) = self.fields.validate() {
            debug!(error = %err, "contact form rejected");
            return Some(Toast::error("Error", err.to_string()).lasting(TOAST_SECS));
        }

        info!("Sending contact message");
        self.state = SubmitState::Submitting {
            completes_at: now + self.delay_secs,
        };
        None
    }

    /// Finish a submission whose delay has elapsed
    pub fn poll(&mut self, now: f64) -> Option<Toast> {
        match self.state {
            SubmitState::Submitting { completes_at } if now >= completes_at => {
                self.state = SubmitState::Idle;
                self.fields = ContactFields::default();
                info!("Contact message sent");
                Some(
                    Toast::success(
                        "Message Sent Successfully!",
                        "Thank you for your message. I'll get back to you soon.",
                    )
                    .lasting(TOAST_SECS),
                )
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build a DEX".to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("no-at-sign"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("me@"));
        assert!(!looks_like_email("me@two@ats"));
        assert!(!looks_like_email("me @example.com"));
    }

    #[test]
    fn test_validation_order() {
        let mut fields = filled();
        fields.name = "  ".to_string();
        assert_eq!(fields.validate(), Err(FieldError::MissingName));

        let mut fields = filled();
        fields.email.clear();
        assert_eq!(fields.validate(), Err(FieldError::MissingEmail));

        let mut fields = filled();
        fields.email = "nope".to_string();
        assert_eq!(fields.validate(), Err(FieldError::InvalidEmail));

        let mut fields = filled();
        fields.message.clear();
        assert_eq!(fields.validate(), Err(FieldError::MissingMessage));

        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_submission_completes_after_delay_and_clears() {
        let mut form = ContactForm::new(2.0);
        form.fields = filled();

        assert!(form.submit(10.0).is_none());
        assert!(form.is_submitting());
        assert!(form.poll(11.9).is_none());
        assert_eq!(form.fields, filled());

        let toast = form.poll(12.0).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Message Sent Successfully!");
        assert!(!form.is_submitting());
        assert_eq!(form.fields, ContactFields::default());
    }

    #[test]
    fn test_invalid_submission_reports_error() {
        let mut form = ContactForm::default();
        let toast = form.submit(0.0).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut form = ContactForm::new(2.0);
        form.fields = filled();
        form.submit(0.0);
        assert!(form.submit(1.0).is_none());
        assert!(form.poll(2.0).is_some());
    }
}
