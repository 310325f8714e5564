use once_cell::sync::Lazy;
use ruleseq::prelude::*;

use crate::Pairs;

static TUPLE: Lazy<Sequence> = Lazy::new(|| {
    let punct = |ch: char| Rule::char(ch.to_string(), ch).capture(false);
    let pair = Sequence::new("pair")
        .with(Rule::alpha())
        .with(punct(':'))
        .with(Rule::num());
    let pairs = Sequence::new("pairs")
        .with(pair.named("pair,").with(punct(',')).until_fail())
        .optional();
    Sequence::new("tuple")
        .with(punct('('))
        .with(pairs)
        .with(pair)
        .with(punct(')'))
});

static COMPILED: Lazy<Option<Sequence>> = Lazy::new(|| {
    let pair = Sequence::from_directives("pair", &["ralpha", "c:, #1, g0", "rnum"]).ok()?;
    let pair_comma =
        Sequence::from_directives("pair,", &["ralpha", "c:, #1, g0", "rnum", "c,, #1, g0"]).ok()?;
    let open = Sequence::from_directives("(", &["c(, #1, g0"]).ok()?;
    let close = Sequence::from_directives(")", &["c), #1, g0"]).ok()?;
    Some(
        Sequence::new("tuple")
            .with(open)
            .with(Sequence::new("pairs").with(pair_comma.until_fail()).optional())
            .with(pair)
            .with(close),
    )
});

fn pairs<'a>(res: Result<ParseResult<'a>, ParseError>) -> Pairs<'a> {
    res.map(|r| {
        r.captures()
            .chunks(2)
            .filter_map(|kv| match kv {
                [k, v] => Some((*k, *v)),
                _ => None,
            })
            .collect()
    })
    .unwrap_or_default()
}

pub fn ruleseq_parser(s: &str) -> Pairs<'_> {
    pairs(TUPLE.parse(s))
}

pub fn directive_parser(s: &str) -> Pairs<'_> {
    match COMPILED.as_ref() {
        Some(seq) => pairs(seq.parse(s)),
        None => Pairs::default(),
    }
}
