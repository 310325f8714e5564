//! Wrappers that change how a [`Sequence`] is matched.
//!
//! | wrapper       | tries                                   | succeeds when          |
//! |---------------|-----------------------------------------|------------------------|
//! | [`UntilFail`] | the whole sequence, again and again     | at least one iteration |
//! | [`AnyOf`]     | every element, each on the *same* input | any element matched    |
//! | [`OneOf`]     | elements in order, on the same input    | the first that matches |
//! | [`Optional`]  | the whole sequence once                 | always                 |
//!
//! `AnyOf` does not advance a shared cursor: every alternative is tried against the input
//! `AnyOf` itself was given, and the result's remainder is that same input. It answers "which
//! of these match here", not "match one of these and carry on"; use `OneOf` for the latter.

use std::sync::Arc;

use crate::error::bad_match;
use crate::logging::Loggable;
use crate::parser::Parsable;
use crate::prelude::{ParseError, ParseResult, Sequence};

/// Every element of `seq` that matches `input`, each tried against `input` itself, in order.
fn alternatives<'s, 'a>(
    seq: &'s Sequence,
    input: &'a str,
) -> impl Iterator<Item = ParseResult<'a>> + 's
where
    'a: 's,
{
    seq.elements().iter().filter_map(move |p| p.parse(input).ok())
}

/// Greedy one-or-more repetition of a sequence.
///
/// Iterations are merged into one result until an iteration fails; the failing iteration
/// contributes nothing. An iteration that consumes no input ends the repetition.
#[derive(Debug, Clone)]
pub struct UntilFail {
    seq: Sequence,
}

impl UntilFail {
    pub fn new(seq: Sequence) -> Self {
        Self { seq }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.seq
    }
}

impl Parsable for UntilFail {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        self.log_inputs("until_fail", input);
        let mut all = ParseResult::new(Arc::clone(self.seq.shared_name()), vec![], input);
        let mut iterations = 0_usize;
        while let Ok(res) = self.seq.parse(all.rest()) {
            let before = all.rest().len();
            let rest = res.rest();
            all.append(res);
            all.set_rest(rest);
            iterations += 1;
            if rest.is_empty() || rest.len() == before {
                break;
            }
        }
        if iterations == 0 {
            let e = bad_match(self.name(), input, "no iteration");
            self.log_failure("until_fail", input, &e);
            return Err(e);
        }
        let all = self.seq.finish(all);
        self.log_success("until_fail", &all);
        Ok(all)
    }

    fn name(&self) -> &str {
        self.seq.name()
    }
}

/// Tries every element against the same input and keeps all that match.
///
/// The remainder of the returned result is the input it was given.
#[derive(Debug, Clone)]
pub struct AnyOf {
    seq: Sequence,
}

impl AnyOf {
    pub fn new(seq: Sequence) -> Self {
        Self { seq }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.seq
    }
}

impl Parsable for AnyOf {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        self.log_inputs("any_of", input);
        let mut all = ParseResult::new(Arc::clone(self.seq.shared_name()), vec![], input);
        let mut matched = 0_usize;
        for res in alternatives(&self.seq, input) {
            all.append(res);
            matched += 1;
        }
        if matched == 0 {
            let e = bad_match(self.name(), input, "no alternative");
            self.log_failure("any_of", input, &e);
            return Err(e);
        }
        let all = self.seq.finish(all);
        self.log_success("any_of", &all);
        Ok(all)
    }

    fn name(&self) -> &str {
        self.seq.name()
    }
}

/// Ordered choice: the first element, in declaration order, that matches.
///
/// The winning element's result is recorded as the only child, and its remainder becomes the
/// remainder of the whole.
#[derive(Debug, Clone)]
pub struct OneOf {
    seq: Sequence,
}

impl OneOf {
    pub fn new(seq: Sequence) -> Self {
        Self { seq }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.seq
    }
}

impl Parsable for OneOf {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        self.log_inputs("one_of", input);
        match alternatives(&self.seq, input).next() {
            Some(res) => {
                let mut one = ParseResult::new(Arc::clone(self.seq.shared_name()), vec![], input);
                let rest = res.rest();
                one.append(res);
                one.set_rest(rest);
                let one = self.seq.finish(one);
                self.log_success("one_of", &one);
                Ok(one)
            }
            None => {
                let e = bad_match(self.name(), input, "no alternative");
                self.log_failure("one_of", input, &e);
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        self.seq.name()
    }
}

/// Zero-or-one: never fails.
///
/// When the sequence doesn't match, the result is empty and its remainder is the untouched
/// input.
#[derive(Debug, Clone)]
pub struct Optional {
    seq: Sequence,
}

impl Optional {
    pub fn new(seq: Sequence) -> Self {
        Self { seq }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.seq
    }
}

impl Parsable for Optional {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        self.log_inputs("optional", input);
        match self.seq.parse(input) {
            Ok(res) => {
                self.log_success("optional", &res);
                Ok(res)
            }
            Err(e) => {
                self.log_failure("optional (ignored)", input, &e);
                Ok(ParseResult::new(
                    Arc::clone(self.seq.shared_name()),
                    vec![],
                    input,
                ))
            }
        }
    }

    fn name(&self) -> &str {
        self.seq.name()
    }
}
