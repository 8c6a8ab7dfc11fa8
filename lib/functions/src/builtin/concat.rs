use crate::builtin::string_form;
use crate::{BuiltinName, FunctionArity, FunctionName, FunctionResult, MappingFunction};
use rdf_mapping_model::{Literal, ThinResult, Value};

/// Concatenates the string forms of `args` into an `xsd:string` literal.
///
/// If any operand has no string form (e.g., ε, null, an IRI, or a number), the result is ε.
pub fn concat(args: &[Value]) -> Value {
    match try_concat(args) {
        Ok(value) => Value::from(Literal::new_string_literal(value)),
        Err(_) => Value::Undefined,
    }
}

fn try_concat(args: &[Value]) -> ThinResult<String> {
    let mut result = String::new();
    for arg in args {
        result.push_str(string_form(arg)?);
    }
    Ok(result)
}

/// The `concat` builtin.
#[derive(Debug)]
pub struct ConcatFunction {
    name: FunctionName,
}

impl Default for ConcatFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcatFunction {
    /// Creates a new [ConcatFunction].
    pub fn new() -> Self {
        Self {
            name: FunctionName::Builtin(BuiltinName::Concat),
        }
    }
}

impl MappingFunction for ConcatFunction {
    fn name(&self) -> &FunctionName {
        &self.name
    }

    fn arity(&self) -> FunctionArity {
        FunctionArity::AtLeast(2)
    }

    fn invoke(&self, args: &[Value]) -> FunctionResult<Value> {
        self.check_arity(args)?;
        Ok(concat(args))
    }
}
