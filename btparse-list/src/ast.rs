//! Syntax tree produced by [`ListParser`](crate::ListParser).
//!
//! Every node renders back to canonical source through `Display`, with one
//! space after each comma and around each `=`.
use smartstring::alias::String;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `list = list`
    Assign { target: List, value: List },
    /// A bare `list`.
    List(List),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Name(String),
    /// `name = name`
    Pair(String, String),
    /// `list = list` nested inside a list.
    Assign { target: List, value: List },
    List(List),
}

impl Statement {
    pub fn is_assign(&self) -> bool {
        matches!(self, Statement::Assign { .. })
    }
}

impl List {
    /// Nesting depth: 1 for a list with no nested lists.
    pub fn depth(&self) -> usize {
        1 + self
            .elements
            .iter()
            .map(|e| match e {
                Element::List(l) => l.depth(),
                Element::Assign { target, value } => target.depth().max(value.depth()),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { target, value } => write!(f, "{target} = {value}"),
            Statement::List(list) => write!(f, "{list}"),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Name(name) => write!(f, "{name}"),
            Element::Pair(name, value) => write!(f, "{name} = {value}"),
            Element::Assign { target, value } => write!(f, "{target} = {value}"),
            Element::List(list) => write!(f, "{list}"),
        }
    }
}
