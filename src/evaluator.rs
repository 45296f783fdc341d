//! Password rule evaluator - computes which rules a password does not meet.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::messages::format_missing_rules;
use crate::rules::{RULES, RuleName};

/// Delay applied by [`check_password_rules_tx`] before evaluating, so that
/// a burst of keystrokes only produces one result.
#[cfg(feature = "async")]
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// The rules a password does not satisfy, in rule set order.
///
/// An empty set means the password is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MissingRules(Vec<RuleName>);

impl MissingRules {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, rule: RuleName) -> bool {
        self.0.contains(&rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleName> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[RuleName] {
        &self.0
    }

    /// Human-readable message listing the missing rules.
    ///
    /// Empty when nothing is missing.
    pub fn message(&self) -> String {
        format_missing_rules(&self.0)
    }
}

impl fmt::Display for MissingRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl IntoIterator for MissingRules {
    type Item = RuleName;
    type IntoIter = std::vec::IntoIter<RuleName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MissingRules {
    type Item = RuleName;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, RuleName>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Evaluates every rule against an already exposed password.
pub fn missing_rules(password: &str) -> MissingRules {
    let missing: Vec<RuleName> = RULES
        .iter()
        .filter(|rule| !rule.is_satisfied(password))
        .map(|rule| rule.name)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("password checked: {} of {} rules missing", missing.len(), RULES.len());

    MissingRules(missing)
}

/// Checks a password against the rule set.
///
/// # Returns
/// The rules the password does not satisfy, in rule set order.
pub fn check_password_rules(password: &SecretString) -> MissingRules {
    missing_rules(password.expose_secret())
}

/// Returns `true` when the password satisfies every rule.
pub fn is_valid_password(password: &SecretString) -> bool {
    check_password_rules(password).is_empty()
}

/// Outcome of a cancellable evaluation.
#[cfg(feature = "async")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Completed(MissingRules),
    Cancelled,
}

#[cfg(feature = "async")]
impl Evaluation {
    pub fn missing(&self) -> Option<&MissingRules> {
        match self {
            Evaluation::Completed(missing) => Some(missing),
            Evaluation::Cancelled => None,
        }
    }
}

/// Checks a password, stopping early if `token` is cancelled.
///
/// Cancellation is checked before each rule.
#[cfg(feature = "async")]
pub fn check_password_rules_with_token(
    password: &SecretString,
    token: Option<CancellationToken>,
) -> Evaluation {
    let pwd = password.expose_secret();
    let mut missing = Vec::new();

    for rule in &RULES {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("password check cancelled before rule {}", rule.name);
                return Evaluation::Cancelled;
            }
        }

        if !rule.is_satisfied(pwd) {
            missing.push(rule.name);
        }
    }

    Evaluation::Completed(MissingRules(missing))
}

/// Debounced evaluation that sends its result through a channel.
///
/// Waits `delay` first; if the token is cancelled meanwhile (a newer keystroke
/// arrived) nothing is evaluated and `Evaluation::Cancelled` is sent.
#[cfg(feature = "async")]
pub async fn check_password_rules_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
    delay: Duration,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("password check scheduled in {:?}", delay);

    let evaluation = tokio::select! {
        _ = token.cancelled() => Evaluation::Cancelled,
        _ = tokio::time::sleep(delay) => check_password_rules_with_token(password, Some(token.clone())),
    };

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "abc",
        "Short1!",
        "password",
        "PASSWORD",
        "12345678",
        "!!!!!!!!",
        "        ",
        "MyPass123!",
        "Senha segura 1!",
        "ÁÉÍÓÚáéíóú",
        "CorrectHorseBatteryStaple!123",
        "😀😀😀",
        "😀😀😀😀",
        "Aa1!😀😀",
        "\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}",
        "Senha\u{FEFF}1A",
    ];

    #[test]
    fn test_empty_password_misses_everything() {
        let missing = check_password_rules(&secret(""));
        assert_eq!(
            missing.as_slice(),
            &[
                RuleName::Length,
                RuleName::Lower,
                RuleName::Upper,
                RuleName::Number,
                RuleName::Special
            ]
        );
    }

    #[test]
    fn test_valid_password() {
        let pwd = secret("MyPass123!");
        assert!(check_password_rules(&pwd).is_empty());
        assert!(is_valid_password(&pwd));
    }

    #[test]
    fn test_missing_keeps_rule_order() {
        let missing = missing_rules("abc");
        assert_eq!(
            missing.as_slice(),
            &[RuleName::Length, RuleName::Upper, RuleName::Number, RuleName::Special]
        );
    }

    #[test]
    fn test_short_passwords_miss_length() {
        for pwd in SAMPLES.iter().filter(|p| p.encode_utf16().count() < 8) {
            assert!(
                missing_rules(pwd).contains(RuleName::Length),
                "expected length to be missing for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // each emoji is two UTF-16 units
        let missing = missing_rules("😀😀😀😀");
        assert!(!missing.contains(RuleName::Length));
        assert_eq!(
            missing.as_slice(),
            &[RuleName::Lower, RuleName::Upper, RuleName::Number]
        );
        assert!(missing_rules("😀😀😀").contains(RuleName::Length));
    }

    #[test]
    fn test_bom_only_password_has_no_special() {
        let missing = missing_rules("\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}\u{FEFF}");
        assert!(missing.contains(RuleName::Special));
        assert!(!missing.contains(RuleName::Length));
    }

    #[test]
    fn test_passwords_without_digit_miss_number() {
        for pwd in SAMPLES.iter().filter(|p| !p.chars().any(|c| c.is_ascii_digit())) {
            assert!(
                missing_rules(pwd).contains(RuleName::Number),
                "expected number to be missing for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_is_valid_matches_empty_missing() {
        for pwd in SAMPLES {
            let s = secret(pwd);
            assert_eq!(is_valid_password(&s), check_password_rules(&s).is_empty());
        }
    }

    #[test]
    fn test_check_is_idempotent() {
        for pwd in SAMPLES {
            let s = secret(pwd);
            assert_eq!(check_password_rules(&s), check_password_rules(&s));
        }
    }

    #[test]
    fn test_missing_rules_display() {
        let missing = missing_rules("abcdefgh1!");
        assert_eq!(missing.len(), 1);
        assert_eq!(missing.to_string(), "Falta: uma letra maiúscula (A–Z).");
        assert_eq!(missing_rules("Abcdefg1!").to_string(), "");
    }

    #[test]
    fn test_missing_rules_iteration() {
        let missing = missing_rules("ABCDEFGH");
        let names: Vec<_> = missing.iter().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["lower", "number", "special"]);

        let owned: Vec<_> = missing.into_iter().collect();
        assert_eq!(owned, vec![RuleName::Lower, RuleName::Number, RuleName::Special]);
    }
}
