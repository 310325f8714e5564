use std::fmt;
use std::sync::Arc;

use crate::logging::Loggable;
use crate::prelude::{ParseError, ParseResult};

/// Anything that can be matched against the front of a string.
///
/// Leaf [`Rule`](crate::prelude::Rule)s, composite [`Sequence`](crate::prelude::Sequence)s
/// and every combinator wrapper implement this, so any of them can be used wherever a grammar
/// element is expected. Implementations must not mutate themselves while parsing; grammars are
/// built once and shared.
pub trait Parsable: fmt::Debug + Send + Sync {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError>;
    fn name(&self) -> &str;
}

/// A shared, type-erased grammar element.
pub type Element = Arc<dyn Parsable>;

impl<P: Parsable + ?Sized> Parsable for Arc<P> {
    #[inline]
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        (**self).parse(input)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Parsable + ?Sized> Parsable for Box<P> {
    #[inline]
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        (**self).parse(input)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

pub type StrFunc = for<'a> fn(&'a str) -> Result<ParseResult<'a>, ParseError>;

/// A plain function used as a grammar element, for hand-written matchers that the rule
/// vocabulary can't express.
#[derive(Clone)]
pub struct FnParser {
    name: Arc<str>,
    func: StrFunc,
}

impl FnParser {
    pub fn new(name: impl Into<Arc<str>>, func: StrFunc) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl fmt::Debug for FnParser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FnParser").field("name", &self.name).finish()
    }
}

impl Parsable for FnParser {
    fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        self.log_inputs("fn", input);
        let res = (self.func)(input);
        match &res {
            Ok(r) => self.log_success("fn", r),
            Err(e) => self.log_failure("fn", input, e),
        }
        res
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Element, FnParser, Parsable};
    use crate::error::bad_match;
    use crate::prelude::*;
    use test_log::test;

    fn till_semicolon(s: &str) -> Result<ParseResult<'_>, ParseError> {
        match s.find(';') {
            Some(i) => Ok(ParseResult::new("till ;", vec![&s[..i]], &s[i + 1..])),
            None => Err(bad_match("till ;", s, "no ';'")),
        }
    }

    #[test]
    fn test_casting() {
        fn lp(p: impl Parsable, s: &str) -> usize {
            p.parse(s).map(|r| r.len()).unwrap_or_default()
        }

        let f = FnParser::new("till ;", till_semicolon);
        assert_eq!(f.name(), "till ;");
        assert_eq!(lp(f.clone(), "abc;def"), 1);
        assert_eq!(lp(Box::new(f.clone()), "abc;def"), 1);
        assert_eq!(lp(Arc::new(f.clone()), "abc"), 0);

        let e: Element = Arc::new(f);
        let r = e.parse("x;y").unwrap();
        assert_eq!(r.captures(), &["x"]);
        assert_eq!(r.rest(), "y");
    }

    #[test]
    fn test_fn_parser_in_sequence() {
        let seq = Sequence::new("stmt")
            .with(FnParser::new("till ;", till_semicolon))
            .with(Rule::alpha());
        let r = seq.parse("let x;abc1").unwrap();
        assert_eq!(r.captures(), &["let x", "abc"]);
        assert_eq!(r.rest(), "1");
        assert!(seq.parse("let x").is_err());
    }
}
