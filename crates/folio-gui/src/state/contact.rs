//! Contact form state and field validation.

use crate::constants::{MESSAGE_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS};

// =============================================================================
// FIELDS AND VALIDATION
// =============================================================================

/// Contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Why a field value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty (after trimming).
    Required,
    /// Name contains non-letter characters or is the wrong length.
    InvalidName,
    /// Email does not look like `local@domain.tld`.
    InvalidEmail,
    /// Message is shorter than the minimum.
    TooShort,
}

impl FieldError {
    /// User-facing message for the inline error line.
    pub fn message(self, field: ContactField) -> &'static str {
        match (self, field) {
            (Self::Required, ContactField::Name) => "Please enter your name",
            (Self::Required, ContactField::Email) => "Please enter your email",
            (Self::Required, ContactField::Message) => "Please enter a message",
            (Self::InvalidName, _) => "Name must be 2-50 letters and spaces",
            (Self::InvalidEmail, _) => "Please enter a valid email address",
            (Self::TooShort, _) => "Message must be at least 10 characters",
        }
    }
}

/// Validate a name: letters and spaces only, 2 to 50 characters.
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    let count = trimmed.chars().count();
    let letters_only = trimmed.chars().all(|c| c.is_alphabetic() || c == ' ');
    if count < NAME_MIN_CHARS || count > NAME_MAX_CHARS || !letters_only {
        return Err(FieldError::InvalidName);
    }
    Ok(())
}

/// Validate an email address shape: `local@domain.tld`.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(FieldError::InvalidEmail);
    };
    let domain_ok = domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
        && domain
            .rsplit('.')
            .next()
            .is_some_and(|tld| tld.chars().count() >= 2);
    if local.is_empty() || local.contains(' ') || domain.contains(' ') || !domain_ok {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Validate the message body: at least 10 characters after trimming.
pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    if trimmed.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError::TooShort);
    }
    Ok(())
}

// =============================================================================
// FORM STATE
// =============================================================================

/// Contact form state.
///
/// A successful delivery clears the form and is announced as a toast; a
/// failed one keeps the draft and sets [`ContactState::submit_error`] for
/// the dismissible banner under the form.
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Fields the user has edited; errors only show for touched fields or
    /// after a submit attempt.
    touched: [bool; 3],
    /// A submission task is in flight; the form is locked meanwhile.
    pub in_flight: bool,
    /// Why the last submission failed, if it did; cleared on edit.
    pub submit_error: Option<String>,
}

impl ContactState {
    /// Update a field value and mark it touched.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        self.touched[Self::index(field)] = true;
        self.submit_error = None;
    }

    /// Validation result for a field, regardless of touched state.
    pub fn field_error(&self, field: ContactField) -> Option<FieldError> {
        match field {
            ContactField::Name => validate_name(&self.name).err(),
            ContactField::Email => validate_email(&self.email).err(),
            ContactField::Message => validate_message(&self.message).err(),
        }
    }

    /// The error to display inline, suppressed until the field is touched.
    pub fn visible_error(&self, field: ContactField) -> Option<FieldError> {
        if self.touched[Self::index(field)] {
            self.field_error(field)
        } else {
            None
        }
    }

    /// Whether every field currently validates.
    pub fn is_valid(&self) -> bool {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .iter()
            .all(|f| self.field_error(*f).is_none())
    }

    /// Try to start a submission. Marks every field touched so all errors
    /// become visible; returns false (and starts nothing) if any field is
    /// invalid or a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.touched = [true; 3];
        if !self.is_valid() {
            return false;
        }
        self.in_flight = true;
        self.submit_error = None;
        true
    }

    /// Record a finished submission. Success clears the form; failure keeps
    /// the draft and records the reason.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.touched = [false; 3];
                self.submit_error = None;
            }
            Err(reason) => self.submit_error = Some(reason),
        }
    }

    fn index(field: ContactField) -> usize {
        match field {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Message => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_spaces_only() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("Émile").is_ok());
        assert_eq!(validate_name("  "), Err(FieldError::Required));
        assert_eq!(validate_name("A"), Err(FieldError::InvalidName));
        assert_eq!(validate_name("R2-D2"), Err(FieldError::InvalidName));
        assert_eq!(
            validate_name(&"a".repeat(51)),
            Err(FieldError::InvalidName)
        );
        assert!(validate_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn email_requires_local_domain_and_tld() {
        assert!(validate_email("dev@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.co").is_ok());
        assert_eq!(validate_email(""), Err(FieldError::Required));
        assert_eq!(validate_email("no-at.example"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("x@nodot"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("x@dot."), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("x@a.b c"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn message_boundary_is_ten_characters() {
        assert_eq!(validate_message("123456789"), Err(FieldError::TooShort));
        assert!(validate_message("1234567890").is_ok());
        // Trimming happens before counting.
        assert_eq!(
            validate_message("  123456789  "),
            Err(FieldError::TooShort)
        );
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let form = ContactState::default();
        assert!(form.field_error(ContactField::Name).is_some());
        assert!(form.visible_error(ContactField::Name).is_none());
    }

    #[test]
    fn submit_blocks_on_invalid_fields_and_reveals_errors() {
        let mut form = ContactState::default();
        form.set_field(ContactField::Email, "dev@example.com".to_string());
        assert!(!form.begin_submit());
        assert!(!form.in_flight);
        // The untouched name error is now visible.
        assert_eq!(
            form.visible_error(ContactField::Name),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn successful_submit_clears_the_form() {
        let mut form = ContactState::default();
        form.set_field(ContactField::Name, "Ada Lovelace".to_string());
        form.set_field(ContactField::Email, "ada@example.com".to_string());
        form.set_field(ContactField::Message, "Hello from the test suite".to_string());

        assert!(form.begin_submit());
        assert!(form.in_flight);
        assert!(!form.begin_submit(), "double submit while in flight");

        form.finish_submit(Ok(()));
        assert!(!form.in_flight);
        assert!(form.submit_error.is_none());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn failed_submit_keeps_the_draft() {
        let mut form = ContactState::default();
        form.set_field(ContactField::Name, "Ada Lovelace".to_string());
        form.set_field(ContactField::Email, "ada@example.com".to_string());
        form.set_field(ContactField::Message, "Hello from the test suite".to_string());
        form.begin_submit();
        form.finish_submit(Err("connection refused".to_string()));

        assert_eq!(
            form.submit_error.as_deref(),
            Some("connection refused")
        );
        assert_eq!(form.name, "Ada Lovelace");
    }
}
