use std::collections::HashMap;

use ruleseq::prelude::*;

/// cargo run --example key_values -- "(name:'ada',year:1815)"
///
/// RUST_LOG=rseq=trace cargo test --example key_values -- --nocapture
///
/// A bracketed list of `key:value` pairs. Keys are words, values are numbers or quoted words.

fn punct(ch: char) -> Rule {
    Rule::char(ch.to_string(), ch).capture(false)
}

fn tuple() -> Sequence {
    let quoted = Sequence::new("quoted")
        .with(punct('\''))
        .with(CharClass::Alnum.rule())
        .with(punct('\''));
    let value = Sequence::new("value")
        .with(Rule::num())
        .with(quoted)
        .one_of();
    let pair = Sequence::new("pair")
        .with(Rule::alpha().named("key"))
        .with(punct(':'))
        .with(value);
    let pair_comma = pair.named("pair,").with(punct(','));
    let pairs = Sequence::new("pairs")
        .with(pair_comma.until_fail())
        .optional();

    Sequence::new("tuple")
        .with(punct('('))
        .with(pairs)
        .with(pair)
        .with(punct(')'))
}

fn key_values(s: &str) -> Result<HashMap<&str, &str>, ParseError> {
    let res = tuple().parse(s)?;
    Ok(res
        .captures()
        .chunks(2)
        .filter_map(|kv| match kv {
            [k, v] => Some((*k, *v)),
            _ => None,
        })
        .collect())
}

fn main() {
    env_logger::init();
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(name:'ada',year:1815)".to_string());
    match key_values(&input) {
        Ok(map) => {
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort();
            for k in keys {
                println!("{k:<10} {}", map[k]);
            }
        }
        Err(e) => eprintln!("{e}"),
    }
}
