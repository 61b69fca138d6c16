//! # Contact Form
//!
//! The contact-details value collected on the checkout page.
//!
//! ## Immutable Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The form is a VALUE, not shared mutable state.                        │
//! │                                                                         │
//! │  User types in "full name" input                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form = form.with_full_name("Ada")   ← whole value replaced            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI re-renders from the new value                                      │
//! │                                                                         │
//! │  Each keystroke produces a fresh ContactForm; the previous one is      │
//! │  dropped. The form is discarded after a successful submission.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation;

/// Contact details collected at checkout.
///
/// `notes` is the only optional field; it flows onto the order as special
/// instructions. The other three are required before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
}

impl ContactForm {
    /// Creates an empty form, the state on first render of the checkout page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the form with the full name replaced.
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Returns a copy of the form with the email replaced.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Returns a copy of the form with the phone number replaced.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Returns a copy of the form with the notes replaced.
    ///
    /// An empty string is normalized to `None` so the order row stores
    /// NULL rather than "".
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Validates all form fields.
    ///
    /// Returns the first rule violation; the frontend surfaces it next to
    /// the offending input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_full_name(&self.full_name)?;
        validation::validate_email(&self.email)?;
        validation::validate_phone(&self.phone)?;
        if let Some(notes) = &self.notes {
            validation::validate_notes(notes)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm::new()
            .with_full_name("Ada Lovelace")
            .with_email("ada@example.com")
            .with_phone("+1 555 010 2345")
            .with_notes("No onions")
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new();
        assert!(form.full_name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.phone.is_empty());
        assert!(form.notes.is_none());
    }

    #[test]
    fn test_with_methods_replace_wholesale() {
        let form = ContactForm::new().with_full_name("Ada");
        let updated = form.clone().with_full_name("Ada Lovelace");

        assert_eq!(form.full_name, "Ada");
        assert_eq!(updated.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_empty_notes_normalized_to_none() {
        let form = ContactForm::new().with_notes("  ");
        assert!(form.notes.is_none());

        let form = form.with_notes("extra sauce");
        assert_eq!(form.notes.as_deref(), Some("extra sauce"));
    }

    #[test]
    fn test_validate_complete_form() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(ContactForm::new().validate().is_err());

        let no_email = filled_form().with_email("");
        assert!(no_email.validate().is_err());

        let bad_phone = filled_form().with_phone("abc");
        assert!(bad_phone.validate().is_err());
    }
}
