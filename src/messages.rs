//! User-facing messages (Portuguese).

use crate::rules::{RuleName, describe};

/// Shown on submit when the email field is blank.
pub const EMAIL_REQUIRED: &str = "Por favor, insira seu e\u{2011}mail.";

/// Shown on submit when the email does not look like an address.
pub const EMAIL_INVALID: &str = "Insira um e\u{2011}mail válido (ex.: usuario@exemplo.com).";

/// Shown on submit when the password field is empty.
pub const PASSWORD_REQUIRED: &str = "Por favor, insira sua senha.";

/// Formats the list of unmet rules.
///
/// - no rules: `""`
/// - one rule: `"Falta: <description>."`
/// - several: `"Faltam: <d1>, <d2>."`
pub fn format_missing_rules(missing: &[RuleName]) -> String {
    join_descriptions(missing.iter().map(|rule| rule.description()))
}

/// Same as [`format_missing_rules`], for raw rule names.
///
/// Names that do not match a rule are printed as-is.
pub fn format_missing_rule_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    join_descriptions(names.into_iter().map(describe))
}

fn join_descriptions<'a>(descriptions: impl Iterator<Item = &'a str>) -> String {
    let texts: Vec<&str> = descriptions.collect();
    let prefix = match texts.len() {
        0 => return String::new(),
        1 => "Falta: ",
        _ => "Faltam: ",
    };
    format!("{}{}.", prefix, texts.join(", "))
}
