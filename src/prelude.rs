pub use crate::combinator::{AnyOf, OneOf, Optional, UntilFail};
pub use crate::directive::{self, compile};
pub use crate::error::{Error, GrammarError, Location, ParseError};
pub use crate::grammar::Grammar;
pub use crate::parser::{Element, FnParser, Parsable, StrFunc};
pub use crate::result::ParseResult;
pub use crate::rule::{CharPredicate, Repeat, Rule};
pub use crate::sequence::Sequence;
pub use crate::table::{CharClass, RuleTable};
