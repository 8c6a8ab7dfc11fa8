use crate::{BuiltinName, FunctionArity, FunctionName, FunctionResult, MappingFunction};
use rdf_mapping_model::{Iri, Literal, NamedNode, Term, ThinError, ThinResult, Value};

/// Converts `value` into a literal with the given `datatype`.
///
/// The lexical form of the result is the lexical form of a literal, the identifier of an IRI or
/// a blank node, or the canonical string of a native scalar. The original datatype of a literal is
/// discarded.
///
/// The datatype can be an IRI, a string holding an absolute IRI, or null (resulting in a literal
/// without datatype). ε and null values produce ε.
///
/// A datatype that is ε, a number, a boolean, a blank node, a literal, or a string that does not
/// parse as an absolute IRI also produces ε.
pub fn to_literal(value: &Value, datatype: &Value) -> Value {
    match try_to_literal(value, datatype) {
        Ok(literal) => Value::from(literal),
        Err(_) => Value::Undefined,
    }
}

fn try_to_literal(value: &Value, datatype: &Value) -> ThinResult<Literal> {
    let lexical_form = lexical_form(value)?;
    Ok(match datatype_iri(datatype)? {
        Some(datatype) => Literal::new_typed_literal(lexical_form, datatype),
        None => Literal::new_untyped_literal(lexical_form),
    })
}

fn lexical_form(value: &Value) -> ThinResult<String> {
    Ok(match value {
        Value::Null | Value::Undefined => return ThinError::expected(),
        Value::String(value) => value.clone(),
        Value::Integer(value) => value.to_string(),
        Value::Float(value) => float_lexical_form(*value),
        Value::Boolean(value) => value.to_string(),
        Value::Term(term) => term.as_str().to_owned(),
    })
}

fn datatype_iri(datatype: &Value) -> ThinResult<Option<NamedNode>> {
    match datatype {
        Value::Null => Ok(None),
        Value::Term(Term::NamedNode(node)) => Ok(Some(node.clone())),
        Value::String(value) => Ok(Some(NamedNode::from(Iri::parse(value.clone())?))),
        _ => ThinError::expected(),
    }
}

/// Integral floats keep a trailing `.0`; special values use the XSD spelling.
fn float_lexical_form(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 { "INF" } else { "-INF" }.to_owned()
    } else {
        format!("{value:?}")
    }
}

/// The `to_literal` builtin. Accepts the value and the datatype.
#[derive(Debug)]
pub struct ToLiteralFunction {
    name: FunctionName,
}

impl Default for ToLiteralFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl ToLiteralFunction {
    /// Creates a new [ToLiteralFunction].
    pub fn new() -> Self {
        Self {
            name: FunctionName::Builtin(BuiltinName::ToLiteral),
        }
    }
}

impl MappingFunction for ToLiteralFunction {
    fn name(&self) -> &FunctionName {
        &self.name
    }

    fn arity(&self) -> FunctionArity {
        FunctionArity::Fixed(2)
    }

    fn invoke(&self, args: &[Value]) -> FunctionResult<Value> {
        self.check_arity(args)?;
        Ok(to_literal(&args[0], &args[1]))
    }
}
