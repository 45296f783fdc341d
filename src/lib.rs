//! Login form validation library
//!
//! This library checks the two fields of a login form: the email format and
//! the password composition rules. It reports which password rules are
//! missing, formats them as a (Portuguese) hint, and provides a headless
//! [`LoginForm`] that tracks inline errors and the password visibility toggle
//! for a UI binding.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable password checks
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use login_validation::{check_password_rules, is_valid_email, RuleName};
//! use secrecy::SecretString;
//!
//! assert!(is_valid_email("user@example.com"));
//!
//! let password = SecretString::new("minhasenha".to_string().into());
//! let missing = check_password_rules(&password);
//!
//! assert!(missing.contains(RuleName::Upper));
//! println!("{}", missing);
//! ```

// Internal modules
mod email;
mod evaluator;
mod form;
mod messages;
mod rules;

// Public API
pub use email::is_valid_email;
pub use evaluator::{MissingRules, check_password_rules, is_valid_password, missing_rules};
pub use form::{Field, FieldState, LoginForm, PasswordVisibility, SubmitOutcome};
pub use messages::{
    EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED, format_missing_rule_names,
    format_missing_rules,
};
pub use rules::{MIN_LENGTH, RULES, Rule, RuleName, RuleStatus, UnknownRuleError, describe, rule_statuses};

#[cfg(feature = "async")]
pub use evaluator::{
    DEFAULT_DEBOUNCE, Evaluation, check_password_rules_tx, check_password_rules_with_token,
};
