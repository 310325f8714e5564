use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::error::bad_match;
use crate::logging::Loggable;
use crate::parser::Parsable;
use crate::prelude::{CharClass, ParseError, ParseResult, Sequence};

pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// How many times a rule's matcher must match.
///
/// A count of zero is never stored; `Repeat::exactly(0)` (and `Rule::repeat(0)`) mean greedy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// as many as match, at least one
    #[default]
    Greedy,
    Exactly(NonZeroUsize),
}

impl Repeat {
    pub fn exactly(n: usize) -> Self {
        NonZeroUsize::new(n).map_or(Self::Greedy, Self::Exactly)
    }

    #[inline]
    fn limit(self) -> usize {
        match self {
            Self::Greedy => usize::MAX,
            Self::Exactly(n) => n.get(),
        }
    }

    fn check(self, count: usize) -> Result<(), &'static str> {
        match self {
            _ if count == 0 => Err("no match"),
            Self::Exactly(n) if count < n.get() => Err("too few"),
            _ => Ok(()),
        }
    }
}

impl From<usize> for Repeat {
    fn from(n: usize) -> Self {
        Self::exactly(n)
    }
}

#[derive(Clone)]
enum Matcher {
    Any,
    Class(CharPredicate),
    Text(Arc<str>),
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Class(_) => write!(f, "Class(..)"),
            Self::Text(t) => write!(f, "Text({t:?})"),
        }
    }
}

/// Atomic matcher: a character class (or literal text), a repeat spec and a capture flag.
///
/// Rules are immutable. Every builder method consumes the rule and hands back a new one, so a
/// rule shared between several grammars can't be changed underneath them.
///
/// ```
/// use ruleseq::prelude::*;
///
/// let r = Rule::alpha().parse("abc.def").unwrap();
/// assert_eq!(r.captures(), &["abc"]);
/// assert_eq!(r.rest(), ".def");
///
/// let r = Rule::alpha().repeat(3).parse("aaaa").unwrap();
/// assert_eq!(r.captures(), &["aaa"]);
/// assert_eq!(r.rest(), "a");
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    name: Arc<str>,
    matcher: Matcher,
    repeat: Repeat,
    capture: bool,
}

impl Rule {
    /// Greedy, capturing rule over the characters satisfying `pred`.
    pub fn new<F>(name: impl Into<Arc<str>>, pred: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            matcher: Matcher::Class(Arc::new(pred)),
            repeat: Repeat::Greedy,
            capture: true,
        }
    }

    /// The wildcard: matches any character.
    pub fn any(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Any,
            repeat: Repeat::Greedy,
            capture: true,
        }
    }

    /// Matches any of the characters in `set`.
    pub fn chars(name: impl Into<Arc<str>>, set: &str) -> Self {
        let set: Vec<char> = set.chars().collect();
        Self::new(name, move |c| set.contains(&c))
    }

    /// Matches exactly one `ch`.
    pub fn char(name: impl Into<Arc<str>>, ch: char) -> Self {
        Self::new(name, move |c| c == ch).repeat(1)
    }

    /// Matches the literal `text` once. With `repeat(n)` it needs `n` back-to-back occurrences
    /// and captures each one separately.
    pub fn text(name: impl Into<Arc<str>>, text: &str) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Text(text.into()),
            repeat: Repeat::Greedy,
            capture: true,
        }
    }

    pub fn alpha() -> Self {
        CharClass::Alpha.rule()
    }

    pub fn num() -> Self {
        CharClass::Num.rule()
    }

    pub fn named(self, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Replaces whatever this rule matched with the characters satisfying `pred`.
    pub fn check<F>(self, pred: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self {
            matcher: Matcher::Class(Arc::new(pred)),
            ..self
        }
    }

    /// Restricts this rule to the single character `ch`, keeping its repeat and capture.
    pub fn only_char(self, ch: char) -> Self {
        self.check(move |c| c == ch)
    }

    pub fn repeat(self, n: usize) -> Self {
        Self {
            repeat: Repeat::exactly(n),
            ..self
        }
    }

    pub fn greedy(self) -> Self {
        Self {
            repeat: Repeat::Greedy,
            ..self
        }
    }

    pub fn capture(self, capture: bool) -> Self {
        Self { capture, ..self }
    }

    /// True for the unconstrained wildcard, which would match any input.
    pub fn is_any(&self) -> bool {
        matches!(self.matcher, Matcher::Any)
    }

    #[inline]
    pub fn repeat_spec(&self) -> Repeat {
        self.repeat
    }

    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.capture
    }

    /// This rule as a one-element sequence of the same name.
    pub fn seq(&self) -> Sequence {
        Sequence::new(Arc::clone(&self.name)).with(self.clone())
    }

    fn scan_chars(&self, input: &str, pred: impl Fn(char) -> bool) -> Result<usize, &'static str> {
        let limit = self.repeat.limit();
        let mut count = 0;
        let mut end = 0;
        for (i, c) in input.char_indices() {
            if count == limit || !pred(c) {
                break;
            }
            count += 1;
            end = i + c.len_utf8();
        }
        self.repeat.check(count).map(|_| end)
    }

    fn scan_text(&self, input: &str, text: &str) -> Result<usize, &'static str> {
        if text.is_empty() {
            return Err("empty literal");
        }
        let limit = match self.repeat {
            Repeat::Greedy => 1,
            Repeat::Exactly(n) => n.get(),
        };
        let mut count = 0;
        let mut end = 0;
        while count < limit && input[end..].starts_with(text) {
            count += 1;
            end += text.len();
        }
        self.repeat.check(count).map(|_| end)
    }
}

/// Splits a run of back-to-back literals of byte length `len` into one slice per literal.
fn occurrences(matched: &str, len: usize) -> Vec<&str> {
    (0..matched.len())
        .step_by(len)
        .map(|i| &matched[i..i + len])
        .collect()
}

impl Parsable for Rule {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        self.log_inputs("rule", input);
        let scanned = if input.is_empty() {
            Err("empty input")
        } else {
            match &self.matcher {
                Matcher::Any => self.scan_chars(input, |_| true),
                Matcher::Class(pred) => self.scan_chars(input, |c| pred(c)),
                Matcher::Text(text) => self.scan_text(input, text),
            }
        };
        match scanned {
            Ok(end) => {
                let (matched, rest) = input.split_at(end);
                let captures = match &self.matcher {
                    _ if !self.capture => vec![],
                    Matcher::Text(text) => occurrences(matched, text.len()),
                    _ => vec![matched],
                };
                let res = ParseResult::new(Arc::clone(&self.name), captures, rest);
                self.log_success("rule", &res);
                Ok(res)
            }
            Err(reason) => {
                let e = bad_match(&self.name, input, reason);
                self.log_failure("rule", input, &e);
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
