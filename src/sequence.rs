use std::sync::Arc;

use crate::error::bad_match;
use crate::logging::Loggable;
use crate::parser::{Element, Parsable};
use crate::prelude::{AnyOf, OneOf, Optional, ParseError, ParseResult, UntilFail};

/// Ordered composite: every element must match, each against what the previous one left.
///
/// Elements are tried strictly in the order given and there is no backtracking into an
/// element that has already matched. The first failure aborts the whole attempt.
///
/// A sequence is an immutable value; [`Sequence::with`] and friends build a new sequence and
/// leave the receiver untouched, so variants can be derived from a shared base.
#[derive(Debug, Clone)]
pub struct Sequence {
    name: Arc<str>,
    elements: Vec<Element>,
    capture: bool,
}

impl Sequence {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            capture: true,
        }
    }

    pub fn of(name: impl Into<Arc<str>>, elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            name: name.into(),
            elements: elements.into_iter().collect(),
            capture: true,
        }
    }

    /// A copy of this sequence with `p` appended.
    pub fn with(&self, p: impl Parsable + 'static) -> Self {
        self.with_element(Arc::new(p))
    }

    pub fn with_element(&self, e: Element) -> Self {
        let mut elements = self.elements.clone();
        elements.push(e);
        Self {
            elements,
            ..self.clone()
        }
    }

    pub fn named(&self, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// When off, this sequence still consumes input but hands no captures or children to its
    /// parent.
    pub fn with_capture(&self, capture: bool) -> Self {
        Self {
            capture,
            ..self.clone()
        }
    }

    #[inline]
    pub(crate) fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.capture
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn until_fail(&self) -> UntilFail {
        UntilFail::new(self.clone())
    }

    pub fn any_of(&self) -> AnyOf {
        AnyOf::new(self.clone())
    }

    pub fn one_of(&self) -> OneOf {
        OneOf::new(self.clone())
    }

    pub fn optional(&self) -> Optional {
        Optional::new(self.clone())
    }

    /// Applies the capture flag to a result this sequence (or a wrapper of it) produced.
    pub(crate) fn finish<'a>(&self, res: ParseResult<'a>) -> ParseResult<'a> {
        if self.capture {
            res
        } else {
            res.discard_output()
        }
    }
}

impl From<crate::prelude::Rule> for Sequence {
    fn from(rule: crate::prelude::Rule) -> Self {
        rule.seq()
    }
}

impl Parsable for Sequence {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        self.log_inputs("seq", input);
        if self.elements.is_empty() {
            let e = bad_match(&self.name, input, "empty sequence");
            self.log_failure("seq", input, &e);
            return Err(e);
        }
        let mut all = ParseResult::new(Arc::clone(&self.name), vec![], input);
        for element in &self.elements {
            let res = match element.parse(all.rest()) {
                Ok(res) => res,
                Err(e) => {
                    self.log_failure("seq", input, &e);
                    return Err(e);
                }
            };
            let rest = res.rest();
            all.append(res);
            all.set_rest(rest);
        }
        let all = self.finish(all);
        self.log_success("seq", &all);
        Ok(all)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
