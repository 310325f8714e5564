use std::collections::HashMap;

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::prelude::Rule;

/// Predefined single-character classes, named the way directives refer to them (`ralpha`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CharClass {
    Alpha,
    Num,
    Alnum,
    Space,
    Upper,
    Lower,
    Punct,
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Alpha => c.is_alphabetic(),
            Self::Num => c.is_numeric(),
            Self::Alnum => c.is_alphanumeric(),
            Self::Space => c.is_whitespace(),
            Self::Upper => c.is_uppercase(),
            Self::Lower => c.is_lowercase(),
            Self::Punct => c.is_ascii_punctuation(),
        }
    }

    /// Greedy, capturing rule named after the class.
    pub fn rule(self) -> Rule {
        Rule::new(self.as_ref(), move |c| self.matches(c))
    }
}

static BUILTIN: Lazy<RuleTable> =
    Lazy::new(|| CharClass::iter().map(|cc| (cc.to_string(), cc.rule())).collect());

/// Named rules that directive strings may reference with `r<name>`.
///
/// Passed explicitly to the directive compiler; there is no process-wide table to mutate.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<String, Rule>,
}

impl RuleTable {
    /// A table holding one rule per [`CharClass`].
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Adds (or replaces) `name`, returning any rule it displaced.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(name.into(), rule)
    }

    pub fn with(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.insert(name, rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromIterator<(String, Rule)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (String, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
