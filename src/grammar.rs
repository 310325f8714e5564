use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::directive;
use crate::error::{Error, GrammarError};
use crate::parser::{Element, Parsable};
use crate::prelude::{ParseResult, Rule, RuleTable, Sequence};
use crate::LOG_TARGET;

/// A registry of named, reusable grammar elements.
///
/// Composite elements are declared by referring to elements already registered, by name.
/// References are resolved on the spot, so an element can only ever contain elements defined
/// before it and the registry never holds a cycle.
///
/// ```
/// use ruleseq::prelude::*;
///
/// let mut g = Grammar::new("kv");
/// g.rule("key", Rule::alpha()).unwrap();
/// g.rule("colon", Rule::char(":", ':').capture(false)).unwrap();
/// g.rule("value", Rule::num()).unwrap();
/// g.seq("pair", &["key", "colon", "value"]).unwrap();
///
/// let r = g.parse("pair", "x:42").unwrap();
/// assert_eq!(r.captures(), &["x", "42"]);
/// assert_eq!(r.result_for("value").captures(), &["42"]);
/// ```
#[derive(Debug, Clone)]
pub struct Grammar {
    name: Arc<str>,
    table: RuleTable,
    elements: HashMap<String, Element>,
}

impl Grammar {
    /// An empty registry whose directives compile against the builtin [`RuleTable`].
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            table: RuleTable::builtin(),
            elements: HashMap::new(),
        }
    }

    pub fn with_table(self, table: RuleTable) -> Self {
        Self { table, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn define(&mut self, name: &str, e: Element) -> Result<Element, GrammarError> {
        if self.contains(name) {
            return Err(GrammarError::DuplicateName(name.to_string()));
        }
        debug!(target: LOG_TARGET, "{}: define {name:?} as {e:?}", self.name);
        self.elements.insert(name.to_string(), Arc::clone(&e));
        Ok(e)
    }

    fn resolve(&self, name: &str, refs: &[&str]) -> Result<Sequence, GrammarError> {
        let elements = refs
            .iter()
            .map(|r| self.using(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Sequence::of(name, elements))
    }

    /// Registers `rule` under `name`, renaming it so results are keyed the same way.
    pub fn rule(&mut self, name: &str, rule: Rule) -> Result<Element, GrammarError> {
        self.define(name, Arc::new(rule.named(name)))
    }

    /// Registers any parsable under its own name.
    pub fn add(&mut self, p: impl Parsable + 'static) -> Result<Element, GrammarError> {
        let name = p.name().to_string();
        self.define(&name, Arc::new(p))
    }

    /// A sequence of previously registered elements.
    pub fn seq(&mut self, name: &str, refs: &[&str]) -> Result<Element, GrammarError> {
        let seq = self.resolve(name, refs)?;
        self.define(name, Arc::new(seq))
    }

    pub fn until_fail(&mut self, name: &str, refs: &[&str]) -> Result<Element, GrammarError> {
        let seq = self.resolve(name, refs)?;
        self.define(name, Arc::new(seq.until_fail()))
    }

    pub fn any_of(&mut self, name: &str, refs: &[&str]) -> Result<Element, GrammarError> {
        let seq = self.resolve(name, refs)?;
        self.define(name, Arc::new(seq.any_of()))
    }

    pub fn one_of(&mut self, name: &str, refs: &[&str]) -> Result<Element, GrammarError> {
        let seq = self.resolve(name, refs)?;
        self.define(name, Arc::new(seq.one_of()))
    }

    pub fn optional(&mut self, name: &str, refs: &[&str]) -> Result<Element, GrammarError> {
        let seq = self.resolve(name, refs)?;
        self.define(name, Arc::new(seq.optional()))
    }

    /// Compiles `directives` against this grammar's table and registers the sequence.
    pub fn directives<S: AsRef<str>>(
        &mut self,
        name: &str,
        directives: &[S],
    ) -> Result<Element, GrammarError> {
        if self.contains(name) {
            return Err(GrammarError::DuplicateName(name.to_string()));
        }
        let seq = directive::compile(name, directives, &self.table)?;
        self.define(name, Arc::new(seq))
    }

    pub fn using(&self, name: &str) -> Result<Element, GrammarError> {
        self.elements
            .get(name)
            .cloned()
            .ok_or_else(|| GrammarError::UnknownElement(name.to_string()))
    }

    /// Parses `input` with the element registered as `name`.
    pub fn parse<'a>(&self, name: &str, input: &'a str) -> Result<ParseResult<'a>, Error> {
        Ok(self.using(name)?.parse(input)?)
    }
}
