//! Password composition rules
//!
//! Each rule checks one requirement a login password must meet. The rule set
//! is fixed and ordered; that order is also the order in which unmet rules
//! are listed to the user.

mod length;
mod variety;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use length::{MIN_LENGTH, has_min_length};
pub use variety::{has_digit, has_lowercase, has_special, has_uppercase};

/// Identifies one password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    Length,
    Lower,
    Upper,
    Number,
    Special,
}

impl RuleName {
    /// Canonical name, as used in `data-rule` style identifiers.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleName::Length => "length",
            RuleName::Lower => "lower",
            RuleName::Upper => "upper",
            RuleName::Number => "number",
            RuleName::Special => "special",
        }
    }

    /// The rule record for this name.
    pub fn rule(self) -> &'static Rule {
        // RULES is declared in enum order
        &RULES[self as usize]
    }

    pub fn description(self) -> &'static str {
        self.rule().description
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown password rule: {0}")]
pub struct UnknownRuleError(pub String);

impl FromStr for RuleName {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RULES
            .iter()
            .map(|rule| rule.name)
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRuleError(s.to_string()))
    }
}

/// A named predicate over a password, with the text shown when it is unmet.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: RuleName,
    pub check: fn(&str) -> bool,
    pub description: &'static str,
}

impl Rule {
    pub fn is_satisfied(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

/// The fixed rule set, in listing order.
pub static RULES: [Rule; 5] = [
    Rule {
        name: RuleName::Length,
        check: has_min_length,
        description: "mínimo 8 caracteres",
    },
    Rule {
        name: RuleName::Lower,
        check: has_lowercase,
        description: "uma letra minúscula (a–z)",
    },
    Rule {
        name: RuleName::Upper,
        check: has_uppercase,
        description: "uma letra maiúscula (A–Z)",
    },
    Rule {
        name: RuleName::Number,
        check: has_digit,
        description: "um número (0–9)",
    },
    Rule {
        name: RuleName::Special,
        check: has_special,
        description: "um caractere especial (ex.: !@#$%)",
    },
];

/// State of a single rule for a given password, as shown in a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleStatus {
    pub name: RuleName,
    pub description: &'static str,
    pub satisfied: bool,
}

/// Evaluates every rule against `password`, keeping the rule set order.
pub fn rule_statuses(password: &str) -> Vec<RuleStatus> {
    RULES
        .iter()
        .map(|rule| RuleStatus {
            name: rule.name,
            description: rule.description,
            satisfied: rule.is_satisfied(password),
        })
        .collect()
}

/// Looks up the description for a raw rule name.
///
/// Unknown names are returned unchanged.
pub fn describe(name: &str) -> &str {
    match name.parse::<RuleName>() {
        Ok(rule) => rule.description(),
        Err(_) => name,
    }
}
