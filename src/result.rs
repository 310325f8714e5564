use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Outcome of one successful parse attempt.
///
/// Holds the text captured (flattened across everything appended, in the order it was
/// encountered), the unconsumed remainder of the input, and each immediate child's own
/// result keyed by the child's name. Captures borrow from the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'a> {
    name: Arc<str>,
    captures: Vec<&'a str>,
    rest: &'a str,
    children: HashMap<Arc<str>, ParseResult<'a>>,
}

impl<'a> ParseResult<'a> {
    pub fn new(name: impl Into<Arc<str>>, captures: Vec<&'a str>, rest: &'a str) -> Self {
        Self {
            name: name.into(),
            captures,
            rest,
            children: HashMap::new(),
        }
    }

    /// The "nothing matched" value: no captures, no children, nothing remaining.
    pub fn empty(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, vec![], "")
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn captures(&self) -> &[&'a str] {
        &self.captures
    }

    #[inline]
    pub fn into_captures(self) -> Vec<&'a str> {
        self.captures
    }

    #[inline]
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    #[inline]
    pub fn set_rest(&mut self, rest: &'a str) {
        self.rest = rest;
    }

    /// Merges `child`'s captures after ours and records `child` under its name.
    ///
    /// A later child with the same name replaces the map entry, but its captures are
    /// still added to the flattened list.
    pub fn append(&mut self, child: ParseResult<'a>) {
        self.captures.extend_from_slice(&child.captures);
        self.children.insert(Arc::clone(&child.name), child);
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.rest.is_empty() && self.children.is_empty()
    }

    pub fn has_result(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    pub fn child(&self, name: &str) -> Option<&ParseResult<'a>> {
        self.children.get(name)
    }

    /// The child result recorded under `name`, or an empty result if there is none.
    ///
    /// Use [`ParseResult::has_result`] to tell "absent" from "present but empty".
    pub fn result_for(&self, name: &str) -> ParseResult<'a> {
        self.child(name)
            .cloned()
            .unwrap_or_else(|| ParseResult::empty(name))
    }

    /// Child name to that child's flattened captures.
    pub fn name_map(&self) -> HashMap<&str, Vec<&'a str>> {
        self.children
            .iter()
            .map(|(k, v)| (k.as_ref(), v.captures.clone()))
            .collect()
    }

    /// Drops captures and children, keeping the name and remainder.
    pub(crate) fn discard_output(mut self) -> Self {
        self.captures.clear();
        self.children.clear();
        self
    }
}

impl<'a> fmt::Display for ParseResult<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:?} rest={:?}", self.name, self.captures, self.rest)
    }
}
