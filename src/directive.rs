//! Compiles compact directive strings into a [`Sequence`] of [`Rule`]s.
//!
//! Each directive string becomes one element of the sequence. A directive is a list of tagged
//! tokens separated by `", "`:
//!
//! | token     | meaning                                          |
//! |-----------|--------------------------------------------------|
//! | `r<name>` | start from the named rule in the [`RuleTable`]   |
//! | `#<n>`    | require exactly `n` matches (`#0` means greedy)  |
//! | `c<ch>`   | match only the character `ch`                    |
//! | `g0`/`g1` | capture off / on                                 |
//!
//! ```
//! use ruleseq::directive;
//! use ruleseq::prelude::*;
//!
//! let kv = directive::compile("kv", &["ralpha", "c:, #1", "rnum"], &RuleTable::builtin()).unwrap();
//! let r = kv.parse("key:123,x").unwrap();
//! assert_eq!(r.captures(), &["key", ":", "123"]);
//! assert_eq!(r.rest(), ",x");
//! ```
//!
//! Anything malformed is reported when compiling, with the index of the directive and of the
//! token at fault. A directive that names neither a rule nor a character is rejected rather
//! than compiled into a wildcard.

use log::debug;

use crate::error::GrammarError;
use crate::prelude::{Repeat, Rule, RuleTable, Sequence};
use crate::LOG_TARGET;

const SEPARATOR: &str = ", ";

/// The settings collected from one directive string, before they become a [`Rule`].
#[derive(Debug, Clone, Default)]
pub struct Directive {
    rule: Option<Rule>,
    repeat: Option<Repeat>,
    ch: Option<char>,
    capture: Option<bool>,
}

impl Directive {
    /// Parses the directive at position `index` of its list.
    pub fn parse(index: usize, text: &str, table: &RuleTable) -> Result<Self, GrammarError> {
        let mut d = Self::default();
        for (j, token) in text.split(SEPARATOR).enumerate() {
            let malformed = || GrammarError::MalformedToken {
                directive: index,
                token: j,
                text: token.to_string(),
            };
            let mut chars = token.chars();
            let (Some(tag), arg) = (chars.next(), chars.as_str()) else {
                return Err(malformed());
            };
            if arg.is_empty() {
                return Err(malformed());
            }
            match tag {
                'r' => {
                    let rule = table.get(arg).ok_or_else(|| GrammarError::UnknownRule {
                        directive: index,
                        token: j,
                        name: arg.to_string(),
                    })?;
                    d.rule = Some(rule.clone());
                }
                '#' => {
                    let bad_repeat = || GrammarError::BadRepeat {
                        directive: index,
                        token: j,
                        text: token.to_string(),
                    };
                    if !arg.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(bad_repeat());
                    }
                    let n = arg.parse::<usize>().map_err(|_| bad_repeat())?;
                    d.repeat = Some(Repeat::exactly(n));
                }
                'c' => {
                    let mut it = arg.chars();
                    match (it.next(), it.next()) {
                        (Some(ch), None) => d.ch = Some(ch),
                        _ => return Err(malformed()),
                    }
                }
                'g' => match arg {
                    "0" => d.capture = Some(false),
                    "1" => d.capture = Some(true),
                    _ => return Err(malformed()),
                },
                _ => return Err(malformed()),
            }
        }
        Ok(d)
    }

    /// True when neither a rule nor a character constrains what this directive matches.
    pub fn is_unconstrained(&self) -> bool {
        self.rule.is_none() && self.ch.is_none()
    }

    /// Builds the rule: the referenced rule (or the wildcard), then the repeat, character and
    /// capture overrides, named `name`.
    pub fn into_rule(self, name: &str) -> Rule {
        let mut rule = self.rule.unwrap_or_else(|| Rule::any(name));
        if let Some(repeat) = self.repeat {
            rule = match repeat {
                Repeat::Greedy => rule.greedy(),
                Repeat::Exactly(n) => rule.repeat(n.get()),
            };
        }
        if let Some(ch) = self.ch {
            rule = rule.only_char(ch);
        }
        if let Some(capture) = self.capture {
            rule = rule.capture(capture);
        }
        rule.named(name)
    }
}

/// Compiles `directives` into a sequence called `name`, one rule per directive.
pub fn compile<S: AsRef<str>>(
    name: &str,
    directives: &[S],
    table: &RuleTable,
) -> Result<Sequence, GrammarError> {
    if directives.is_empty() {
        return Err(GrammarError::EmptyGrammar(name.to_string()));
    }
    let mut seq = Sequence::new(name);
    for (i, text) in directives.iter().enumerate() {
        let text = text.as_ref();
        let d = Directive::parse(i, text, table)?;
        if d.is_unconstrained() {
            return Err(GrammarError::Unconstrained {
                directive: i,
                text: text.to_string(),
            });
        }
        let rule = d.into_rule(text);
        debug!(target: LOG_TARGET, "compile {name}[{i}]: {text:?} -> {rule:?}");
        seq = seq.with(rule);
    }
    Ok(seq)
}

impl Sequence {
    /// [`compile`] against the builtin [`RuleTable`].
    pub fn from_directives<S: AsRef<str>>(
        name: &str,
        directives: &[S],
    ) -> Result<Sequence, GrammarError> {
        compile(name, directives, &RuleTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::{compile, Directive};
    use crate::prelude::*;
    use test_log::test;

    fn seq(name: &str, directives: &[&str]) -> Sequence {
        Sequence::from_directives(name, directives)
            .unwrap_or_else(|e| panic!("{name}: {e}"))
    }

    fn ok<'a>(p: &impl Parsable, s: &'a str) -> (Vec<&'a str>, &'a str) {
        let r = p.parse(s).unwrap_or_else(|e| panic!("{s:?}: {e}"));
        (r.captures().to_vec(), r.rest())
    }

    #[test]
    fn test_single_rule() {
        let alpha = seq("alpha", &["ralpha"]);
        assert_eq!(ok(&alpha, "abc"), (vec!["abc"], ""));
        assert_eq!(ok(&alpha, "ab.c"), (vec!["ab"], ".c"));
        assert!(alpha.parse(".").is_err());

        let num = seq("num", &["rnum"]);
        assert_eq!(ok(&num, "12.3"), (vec!["12"], ".3"));
    }

    #[test]
    fn test_matches_hand_built_sequence() {
        let compiled = seq("kv", &["ralpha", "c:, #1", "rnum"]);
        let built = Sequence::new("kv")
            .with(Rule::alpha())
            .with(Rule::char(":", ':'))
            .with(Rule::num());
        for s in ["key:123,x", "a:1", "abc:123", "a:1.", "a::1", ":1", "a1", "a:", ".a:1", ""] {
            let a = compiled.parse(s).map(|r| (r.captures().to_vec(), r.rest()));
            let b = built.parse(s).map(|r| (r.captures().to_vec(), r.rest()));
            assert_eq!(a.is_ok(), b.is_ok(), "{s}");
            if let (Ok(a), Ok(b)) = (a, b) {
                assert_eq!(a, b, "{s}");
            }
        }
        assert_eq!(ok(&compiled, "key:123,x"), (vec!["key", ":", "123"], ",x"));
    }

    #[test]
    fn test_braces_and_special_chars() {
        let obj = seq(
            "obj",
            &[
                "c{, #1",
                "c_, #1",
                "ralpha",
                "c_, #1",
                "c:, #1",
                "ralpha",
                "c}, #1",
            ],
        );
        assert_eq!(
            ok(&obj, "{_abc_:xyz}"),
            (vec!["{", "_", "abc", "_", ":", "xyz", "}"], "")
        );
        assert!(obj.parse(".").is_err());

        // "c," is the comma literal; the separator is ", "
        let special = seq("special", &["c,, #1", "rnum", "c|, #1"]);
        assert_eq!(ok(&special, ",1|"), (vec![",", "1", "|"], ""));
    }

    #[test]
    fn test_repeat_and_capture() {
        let three = seq("alpha3", &["ralpha, #1", "ralpha, #1", "ralpha, #1"]);
        assert_eq!(ok(&three, "abc"), (vec!["a", "b", "c"], ""));

        let quiet = seq("capture", &["ralpha", "c:, g0", "rnum"]);
        assert_eq!(ok(&quiet, "a:1"), (vec!["a", "1"], ""));
        // without #1 the colon is greedy
        assert_eq!(ok(&quiet, "a::1"), (vec!["a", "1"], ""));

        let loud = seq("loud", &["rnum, g0, g1"]);
        assert_eq!(ok(&loud, "42"), (vec!["42"], ""));

        let greedy = seq("zero", &["ralpha, #0"]);
        assert_eq!(ok(&greedy, "abcd1"), (vec!["abcd"], "1"));
    }

    #[test]
    fn test_rule_names_are_directive_text() {
        let kv = seq("kv", &["ralpha", "c:, #1", "rnum"]);
        let names: Vec<&str> = kv.elements().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["ralpha", "c:, #1", "rnum"]);
        assert_eq!(kv.name(), "kv");
        let r = kv.parse("a:1").unwrap();
        assert_eq!(r.result_for("c:, #1").captures(), &[":"]);
    }

    #[test]
    fn test_until_fail_over_compiled() {
        let list = seq("alpha comma", &["ralpha, #1", "c,, #1, g0"]).until_fail();
        assert_eq!(ok(&list, "a,b,c,"), (vec!["a", "b", "c"], ""));
        assert_eq!(ok(&list, "a,b"), (vec!["a"], "b"));
    }

    #[test]
    fn test_custom_table() {
        let table = RuleTable::empty().with("hex", Rule::new("hex", |c| c.is_ascii_hexdigit()));
        let color = compile("color", &["c#, #1, g0", "rhex, #6"], &table).unwrap();
        assert_eq!(ok(&color, "#ff00aa;"), (vec!["ff00aa"], ";"));
        assert!(compile("alpha", &["ralpha"], &table).is_err());
    }

    #[test]
    fn test_builder_errors() {
        let table = RuleTable::builtin();
        let err = |d: &[&str]| compile("bad", d, &table).unwrap_err();

        let none: [&str; 0] = [];
        assert_eq!(err(&none), GrammarError::EmptyGrammar("bad".into()));

        assert_eq!(
            err(&["ralpha", ""]),
            GrammarError::MalformedToken { directive: 1, token: 0, text: "".into() }
        );
        assert_eq!(
            err(&["r"]),
            GrammarError::MalformedToken { directive: 0, token: 0, text: "r".into() }
        );
        assert_eq!(
            err(&["ralpha, x1"]),
            GrammarError::MalformedToken { directive: 0, token: 1, text: "x1".into() }
        );
        assert_eq!(
            err(&["ralpha, g2"]),
            GrammarError::MalformedToken { directive: 0, token: 1, text: "g2".into() }
        );
        assert_eq!(
            err(&["cab"]),
            GrammarError::MalformedToken { directive: 0, token: 0, text: "cab".into() }
        );
        // a single space separator leaves the whole string as one token
        assert!(matches!(err(&["ralpha,#1"]), GrammarError::UnknownRule { .. }));
        assert_eq!(
            err(&["rnum", "rwords"]),
            GrammarError::UnknownRule { directive: 1, token: 0, name: "words".into() }
        );
        assert_eq!(
            err(&["ralpha, #three"]),
            GrammarError::BadRepeat { directive: 0, token: 1, text: "#three".into() }
        );
        assert!(matches!(err(&["rnum, #-1"]), GrammarError::BadRepeat { .. }));
        assert_eq!(
            err(&["rnum, #+3"]),
            GrammarError::BadRepeat { directive: 0, token: 1, text: "#+3".into() }
        );
        assert!(matches!(err(&["rnum, # 3"]), GrammarError::BadRepeat { .. }));
        assert!(matches!(
            err(&["rnum, #99999999999999999999999"]),
            GrammarError::BadRepeat { .. }
        ));
        assert_eq!(
            err(&["ralpha", "#3"]),
            GrammarError::Unconstrained { directive: 1, text: "#3".into() }
        );
        assert_eq!(
            err(&["g0"]),
            GrammarError::Unconstrained { directive: 0, text: "g0".into() }
        );
    }

    #[test]
    fn test_directive_parts() {
        let table = RuleTable::builtin();
        let d = Directive::parse(0, "c:, #1", &table).unwrap();
        assert!(!d.is_unconstrained());
        let rule = d.into_rule("colon");
        assert_eq!(rule.name(), "colon");
        assert_eq!(rule.repeat_spec(), Repeat::exactly(1));
        assert!(rule.is_capturing());

        let d = Directive::parse(3, "#2", &table).unwrap();
        assert!(d.is_unconstrained());
        assert!(d.into_rule("wild").is_any());
    }
}
