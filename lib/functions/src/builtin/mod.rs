//! The builtin functions for constructing RDF terms.
//!
//! All builtins are total: inputs they cannot interpret produce [Value::Undefined] and the
//! undefined value propagates through every builtin.

mod concat;
mod to_iri;
mod to_literal;

pub use concat::{concat, ConcatFunction};
pub use to_iri::{to_iri, ToIriFunction};
pub use to_literal::{to_literal, ToLiteralFunction};

use crate::{BuiltinName, MappingFunctionRef};
use rdf_mapping_model::{Term, ThinError, ThinResult, Value};
use std::sync::Arc;

/// Creates an instance of the builtin `name`.
pub fn create_builtin(name: BuiltinName) -> MappingFunctionRef {
    match name {
        BuiltinName::ToIri => Arc::new(ToIriFunction::new()),
        BuiltinName::ToLiteral => Arc::new(ToLiteralFunction::new()),
        BuiltinName::Concat => Arc::new(ConcatFunction::new()),
    }
}

/// Extracts the string form of `value`.
///
/// Only native strings and `xsd:string` literals have a string form. Literals of any other
/// datatype (including literals without a datatype) do not.
fn string_form(value: &Value) -> ThinResult<&str> {
    match value {
        Value::String(value) => Ok(value),
        Value::Term(Term::Literal(literal)) => literal.as_string().ok_or_else(ThinError::default),
        _ => ThinError::expected(),
    }
}
