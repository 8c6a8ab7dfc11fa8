use crate::builtin::string_form;
use crate::{BuiltinName, FunctionArity, FunctionName, FunctionResult, MappingFunction};
use rdf_mapping_model::{Iri, NamedNode, Term, ThinError, ThinResult, Value};

/// Converts `value` into an IRI, resolving it against `base` if it is relative.
///
/// - ε and null produce ε.
/// - Only native strings and `xsd:string` literals can be converted. Everything else produces ε.
/// - A string that contains a colon is treated as an absolute IRI. If it is not a valid IRI, the
///   result is ε.
/// - Other strings are resolved against `base` following RFC 3986. If there is no (valid) base,
///   the result is ε.
///
/// # Relevant Resources
/// - [RFC 3986 - Reference Resolution](https://www.rfc-editor.org/rfc/rfc3986#section-5)
pub fn to_iri(value: &Value, base: Option<&Value>) -> Value {
    match try_to_iri(value, base) {
        Ok(iri) => Value::from(iri),
        Err(_) => Value::Undefined,
    }
}

fn try_to_iri(value: &Value, base: Option<&Value>) -> ThinResult<NamedNode> {
    let lexical = string_form(value)?;

    if lexical.contains(':') {
        return Ok(NamedNode::from(Iri::parse(lexical.to_owned())?));
    }

    match base.and_then(|base| base_iri(base).ok()) {
        Some(base) => Ok(NamedNode::from(base.resolve(lexical)?)),
        None => ThinError::expected(),
    }
}

fn base_iri(base: &Value) -> ThinResult<Iri<String>> {
    let base = match base {
        Value::Term(Term::NamedNode(node)) => node.as_str(),
        other => string_form(other)?,
    };
    Ok(Iri::parse(base.to_owned())?)
}

/// The `to_iri` builtin. Accepts the value and an optional base IRI.
#[derive(Debug)]
pub struct ToIriFunction {
    name: FunctionName,
}

impl Default for ToIriFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl ToIriFunction {
    /// Creates a new [ToIriFunction].
    pub fn new() -> Self {
        Self {
            name: FunctionName::Builtin(BuiltinName::ToIri),
        }
    }
}

impl MappingFunction for ToIriFunction {
    fn name(&self) -> &FunctionName {
        &self.name
    }

    fn arity(&self) -> FunctionArity {
        FunctionArity::Range(1, 2)
    }

    fn invoke(&self, args: &[Value]) -> FunctionResult<Value> {
        self.check_arity(args)?;
        Ok(to_iri(&args[0], args.get(1)))
    }
}
