//! Small parser-combinator engine over `&str`.
//!
//! A [`Rule`](prelude::Rule) matches a run of characters from one class; a
//! [`Sequence`](prelude::Sequence) chains elements, each parsing what the last left behind; the
//! wrappers [`UntilFail`](prelude::UntilFail), [`AnyOf`](prelude::AnyOf),
//! [`OneOf`](prelude::OneOf) and [`Optional`](prelude::Optional) change how a sequence is
//! matched. Grammars can also be written as compact directive strings (see [`directive`]) or
//! kept in a named registry ([`Grammar`](prelude::Grammar)).
//!
//! Every successful parse yields a [`ParseResult`](prelude::ParseResult) whose captures borrow
//! from the input.
//!
//! ```
//! use ruleseq::prelude::*;
//!
//! let kv = Sequence::new("kv")
//!     .with(Rule::alpha())
//!     .with(Rule::char(":", ':').capture(false))
//!     .with(Rule::num());
//! let list = kv.named("kv,").with(Rule::char(",", ',').capture(false)).until_fail();
//!
//! let r = list.parse("a:1,b:2,rest").unwrap();
//! assert_eq!(r.captures(), &["a", "1", "b", "2"]);
//! assert_eq!(r.rest(), "rest");
//! ```
//!
//! Parse attempts are traced at `trace` level under the `rseq` log target.
#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

mod combinator;
mod error;
mod grammar;
mod logging;
mod parser;
mod result;
mod rule;
mod sequence;
mod table;
mod util;

pub mod directive;
pub mod prelude;

pub(crate) const LOG_TARGET: &str = "rseq";

pub use crate::error::{Error, GrammarError, Location, ParseError};
pub use crate::parser::{Element, Parsable};
