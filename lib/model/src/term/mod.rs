mod literal;

pub use literal::Literal;

use oxrdf::{BlankNode, NamedNode};
use std::fmt;

/// An RDF term as it appears in a mapping tuple.
///
/// All variants are immutable value types. Equality is structural.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Term {
    /// An IRI, identifying a resource.
    NamedNode(NamedNode),
    /// A blank node. Its identifier is only meaningful within one execution.
    BlankNode(BlankNode),
    /// A literal.
    Literal(Literal),
}

impl Term {
    pub fn is_named_node(&self) -> bool {
        matches!(self, Self::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The name of the term kind as used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::NamedNode(_) => "IRI",
            Self::BlankNode(_) => "BlankNode",
            Self::Literal(_) => "Literal",
        }
    }

    /// The string form of the term: the IRI, the blank node identifier or the lexical form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NamedNode(node) => node.as_str(),
            Self::BlankNode(node) => node.as_str(),
            Self::Literal(literal) => literal.lexical_form(),
        }
    }
}

/// Writes the term in N-Triples syntax.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => fmt::Display::fmt(node, f),
            Self::BlankNode(node) => fmt::Display::fmt(node, f),
            Self::Literal(literal) => fmt::Display::fmt(literal, f),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(value: NamedNode) -> Self {
        Self::NamedNode(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Self::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}
