//! Headless login form state.
//!
//! [`LoginForm`] keeps what a page binding needs to render the login form:
//! field values, whether the password is masked, and the inline error of each
//! field. A binding forwards input, toggle and submit events to it and copies
//! the resulting state onto its widgets.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::email::is_valid_email;
use crate::evaluator::missing_rules;
use crate::messages::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED};
use crate::rules::{RuleStatus, rule_statuses};

/// Form fields, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Email => f.write_str("email"),
            Field::Password => f.write_str("password"),
        }
    }
}

/// Whether the password input shows its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Visible,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Visible,
            PasswordVisibility::Visible => PasswordVisibility::Masked,
        }
    }

    /// Value for the input's `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Visible => "text",
        }
    }
}

/// Inline error state of one field.
///
/// `message` is what the error area shows; `invalid` is the flag exposed to
/// assistive technology and is only raised by a submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    message: Option<String>,
    invalid: bool,
}

impl FieldState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    fn show_error(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.invalid = true;
    }

    fn show_hint(&mut self, message: String) {
        self.message = Some(message);
    }

    fn hide(&mut self) {
        self.message = None;
        self.invalid = false;
    }
}

/// Result of submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid,
    /// `first_invalid` is the field that should receive focus.
    Invalid { first_invalid: Field },
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid)
    }
}

#[derive(Debug)]
pub struct LoginForm {
    email: String,
    password: SecretString,
    visibility: PasswordVisibility,
    email_state: FieldState,
    password_state: FieldState,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: SecretString::new(String::new().into()),
            visibility: PasswordVisibility::default(),
            email_state: FieldState::default(),
            password_state: FieldState::default(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn visibility(&self) -> PasswordVisibility {
        self.visibility
    }

    pub fn field_state(&self, field: Field) -> &FieldState {
        match field {
            Field::Email => &self.email_state,
            Field::Password => &self.password_state,
        }
    }

    /// Requirement checklist for the current password.
    pub fn checklist(&self) -> Vec<RuleStatus> {
        rule_statuses(self.password.expose_secret())
    }

    /// Handles a keystroke in the email field.
    ///
    /// Editing the email always clears its error.
    pub fn input_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.email_state.hide();
    }

    /// Handles a keystroke in the password field.
    ///
    /// While the password is non-empty and incomplete, the missing rules are
    /// shown as a hint without marking the field invalid. Once nothing is
    /// missing (or the field is cleared) the hint goes away, unless a submit
    /// has already flagged the field.
    pub fn input_password(&mut self, value: impl Into<String>) -> Vec<RuleStatus> {
        let value: String = value.into();
        self.password = SecretString::new(value.into());
        let pwd = self.password.expose_secret();

        let missing = missing_rules(pwd);
        if !pwd.is_empty() && !missing.is_empty() {
            self.password_state.show_hint(missing.message());
        } else if !self.password_state.is_invalid() {
            self.password_state.hide();
        }

        rule_statuses(pwd)
    }

    /// Flips password masking and returns the new state.
    pub fn toggle_visibility(&mut self) -> PasswordVisibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Validates both fields, updating their error state.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.email.trim().is_empty() {
            self.email_state.show_error(EMAIL_REQUIRED);
        } else if !is_valid_email(&self.email) {
            self.email_state.show_error(EMAIL_INVALID);
        } else {
            self.email_state.hide();
        }

        let pwd = self.password.expose_secret();
        if pwd.is_empty() {
            self.password_state.show_error(PASSWORD_REQUIRED);
        } else {
            let missing = missing_rules(pwd);
            if missing.is_empty() {
                self.password_state.hide();
            } else {
                self.password_state.show_error(missing.message());
            }
        }

        let outcome = [Field::Email, Field::Password]
            .into_iter()
            .find(|field| self.field_state(*field).is_invalid())
            .map_or(SubmitOutcome::Valid, |first_invalid| SubmitOutcome::Invalid {
                first_invalid,
            });

        #[cfg(feature = "tracing")]
        match outcome {
            SubmitOutcome::Valid => tracing::debug!("login form valid, ready to submit"),
            SubmitOutcome::Invalid { first_invalid } => {
                tracing::debug!("login form invalid, focusing {}", first_invalid)
            }
        }

        outcome
    }
}
