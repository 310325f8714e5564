use std::fmt;

use thiserror::Error;

use crate::util;

/// The single runtime failure: nothing valid matched at this position.
///
/// On error the caller gets no partial result; the whole attempt is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("BadMatch: (name='{name}' reason='{reason}' input={})", util::formatter_str(.input).trim_end())]
    BadMatch {
        name: String,
        input: String,
        reason: &'static str,
    },
}

impl ParseError {
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::BadMatch { name, .. } => name,
        }
    }

    /// The input the failing component was handed.
    #[inline]
    pub fn input(&self) -> &str {
        match self {
            Self::BadMatch { input, .. } => input,
        }
    }

    #[inline]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BadMatch { reason, .. } => reason,
        }
    }
}

#[inline]
pub(crate) fn bad_match(name: &str, input: &str, reason: &'static str) -> ParseError {
    ParseError::BadMatch {
        name: name.to_string(),
        input: input.to_string(),
        reason,
    }
}

/// Errors raised while building a grammar, never while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("grammar '{0}' has no directives")]
    EmptyGrammar(String),

    #[error("invalid token '{text}' in directive {directive}, token {token}")]
    MalformedToken {
        directive: usize,
        token: usize,
        text: String,
    },

    #[error("unknown rule '{name}' in directive {directive}, token {token}")]
    UnknownRule {
        directive: usize,
        token: usize,
        name: String,
    },

    #[error("invalid repeat count '{text}' in directive {directive}, token {token}")]
    BadRepeat {
        directive: usize,
        token: usize,
        text: String,
    },

    #[error("directive {directive} ('{text}') names no rule and no character, and would match anything")]
    Unconstrained { directive: usize, text: String },

    #[error("'{0}' is already defined")]
    DuplicateName(String),

    #[error("'{0}' is not defined")]
    UnknownElement(String),
}

/// Either kind of failure, for callers that build and parse in one go.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Where in a directive list a [`GrammarError`] points, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub directive: usize,
    pub token: Option<usize>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.token {
            Some(t) => write!(f, "directive {}, token {}", self.directive, t),
            None => write!(f, "directive {}", self.directive),
        }
    }
}

impl GrammarError {
    pub fn location(&self) -> Option<Location> {
        match *self {
            Self::MalformedToken { directive, token, .. }
            | Self::UnknownRule { directive, token, .. }
            | Self::BadRepeat { directive, token, .. } => Some(Location {
                directive,
                token: Some(token),
            }),
            Self::Unconstrained { directive, .. } => Some(Location {
                directive,
                token: None,
            }),
            _ => None,
        }
    }
}
