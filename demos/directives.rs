use ruleseq::prelude::*;

/// cargo run --example directives -- "ralpha" "c=, #1, g0" "rnum" -- "width=80;"
///
/// RUST_LOG=rseq=debug cargo run --example directives
///
/// Directive strings are compiled into a sequence, which is then run over the input.
/// Arguments before `--` are directives, the one after it is the input.

fn run(directives: &[String], input: &str) -> Result<String, Error> {
    let seq = Sequence::from_directives("cmdline", directives)?;
    let res = seq.parse(input)?;
    Ok(res.to_string())
}

/// Hex colours, via a rule table extended with a `hex` class.
fn colors() -> Result<Grammar, GrammarError> {
    let table = RuleTable::builtin().with("hex", Rule::new("hex", |c| c.is_ascii_hexdigit()));
    let mut g = Grammar::new("colors").with_table(table);
    g.directives("#rgb", &["c#, #1, g0", "rhex, #6"])?;
    g.directives("named", &["ralpha"])?;
    g.one_of("color", &["#rgb", "named"])?;
    g.rule("semi", Rule::char(";", ';').capture(false))?;
    g.seq("color;", &["color", "semi"])?;
    g.until_fail("colors", &["color;"])?;
    Ok(g)
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (directives, input) = match args.iter().position(|a| a == "--") {
        Some(i) => (
            args[..i].to_vec(),
            args.get(i + 1).cloned().unwrap_or_default(),
        ),
        None => (
            vec!["ralpha".to_string(), "c=, #1, g0".to_string(), "rnum".to_string()],
            "width=80;".to_string(),
        ),
    };
    match run(&directives, &input) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("error: {e}"),
    }

    match colors().map_err(Error::from).and_then(|g| g.parse("colors", "#ff8800;teal;")) {
        Ok(r) => println!("{r}"),
        Err(e) => eprintln!("error: {e}"),
    }
}
