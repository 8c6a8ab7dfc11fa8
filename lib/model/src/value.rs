use crate::{Literal, Term};
use oxrdf::{BlankNode, NamedNode};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value bound to an attribute of a mapping tuple.
///
/// Besides RDF terms, a value can hold the native scalars extracted from a source document, an
/// explicit null, and [Value::Undefined]. The latter is the result of any computation that could
/// not produce a value (e.g., a reference to a missing attribute). It is data, not an error, and it
/// is never equal to [Value::Null].
///
/// Equality is structural. Floats are compared by their bit pattern so that [Value] can implement
/// [Eq] and [Hash], which means `NaN == NaN` and `0.0 != -0.0`. Values of different variants are
/// never equal (i.e., `Integer(1) != Float(1.0)`).
#[derive(Clone, Debug)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// An explicit absence of a value, e.g., a JSON `null`.
    Null,
    /// The undefined value ε.
    Undefined,
    Term(Term),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Self::Term(Term::NamedNode(_)))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Term(Term::Literal(_)))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::Term(Term::BlankNode(_)))
    }

    /// Returns true for the native scalar variants (string, integer, float, boolean).
    pub fn is_native(&self) -> bool {
        matches!(
            self,
            Self::String(_) | Self::Integer(_) | Self::Float(_) | Self::Boolean(_)
        )
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Self::Term(term) => Some(term),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// The name of the value kind as used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Boolean(_) => "Boolean",
            Self::Null => "Null",
            Self::Undefined => "Undefined",
            Self::Term(term) => term.kind_name(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) | (Self::Undefined, Self::Undefined) => true,
            (Self::Term(a), Self::Term(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::String(value) => value.hash(state),
            Self::Integer(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Boolean(value) => value.hash(state),
            Self::Null | Self::Undefined => {}
            Self::Term(term) => term.hash(state),
        }
    }
}

/// A diagnostic rendering. Strings are quoted and terms use N-Triples syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => write!(f, "{value:?}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("\u{03b5}"),
            Self::Term(term) => write!(f, "{term}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Term> for Value {
    fn from(value: Term) -> Self {
        Self::Term(value)
    }
}

impl From<NamedNode> for Value {
    fn from(value: NamedNode) -> Self {
        Self::Term(value.into())
    }
}

impl From<BlankNode> for Value {
    fn from(value: BlankNode) -> Self {
        Self::Term(value.into())
    }
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        Self::Term(value.into())
    }
}
