//! Expressions that compute attribute values from a mapping tuple.

mod function_call;

pub use function_call::FunctionCall;

use rdf_mapping_functions::{BuiltinName, FunctionRegistry, FunctionResult, MappingFunctionRef};
use rdf_mapping_model::{MappingTuple, Value};
use std::fmt::{self, Display, Formatter};

/// An expression that is evaluated against a single [MappingTuple].
///
/// Evaluation is total. Every expression produces exactly one [Value], and anything that cannot
/// be computed produces [Value::Undefined].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Always evaluates to the held value.
    Constant(Value),
    /// Evaluates to the value of the referenced attribute, or ε if the tuple lacks it.
    Reference(String),
    /// Evaluates the arguments and applies a function to them.
    FunctionCall(FunctionCall),
}

impl Expression {
    /// Creates a [Expression::Constant].
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    /// Creates a [Expression::Reference].
    pub fn reference(attribute: impl Into<String>) -> Self {
        Expression::Reference(attribute.into())
    }

    /// Creates a [Expression::FunctionCall] of `function`.
    pub fn call(function: MappingFunctionRef, args: impl IntoIterator<Item = Expression>) -> Self {
        Expression::FunctionCall(FunctionCall::new(function, args))
    }

    /// Creates a [Expression::FunctionCall] of the builtin `name`.
    pub fn builtin(name: BuiltinName, args: impl IntoIterator<Item = Expression>) -> Self {
        Expression::FunctionCall(FunctionCall::builtin(name, args))
    }

    /// Creates a [Expression::FunctionCall] of the function that `registry` resolves for `name`.
    ///
    /// Returns an error if the registry does not know the function.
    pub fn call_by_name(
        registry: &dyn FunctionRegistry,
        name: &str,
        args: impl IntoIterator<Item = Expression>,
    ) -> FunctionResult<Self> {
        let function = registry.create_function_by_name(name)?;
        Ok(Self::call(function, args))
    }

    /// Evaluates this expression against `tuple`.
    pub fn evaluate(&self, tuple: &MappingTuple) -> Value {
        match self {
            Expression::Constant(value) => value.clone(),
            Expression::Reference(attribute) => {
                tuple.get(attribute).cloned().unwrap_or(Value::Undefined)
            }
            Expression::FunctionCall(call) => call.evaluate(tuple),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "Const({value})"),
            Expression::Reference(attribute) => write!(f, "Ref({attribute})"),
            Expression::FunctionCall(call) => Display::fmt(call, f),
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Constant(value)
    }
}

impl From<FunctionCall> for Expression {
    fn from(value: FunctionCall) -> Self {
        Expression::FunctionCall(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_mapping_functions::DefaultFunctionRegistry;
    use rdf_mapping_model::{vocab::xsd, Literal, NamedNode};

    fn tuple() -> MappingTuple {
        [("id", Value::Integer(1)), ("name", Value::from("alice"))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_constant_ignores_tuple() {
        let expr = Expression::constant("x");
        assert_eq!(expr.evaluate(&tuple()), Value::from("x"));
        assert_eq!(expr.evaluate(&MappingTuple::new()), Value::from("x"));
    }

    #[test]
    fn test_reference() {
        assert_eq!(
            Expression::reference("name").evaluate(&tuple()),
            Value::from("alice")
        );
        assert_eq!(
            Expression::reference("missing").evaluate(&tuple()),
            Value::Undefined
        );
    }

    #[test]
    fn test_nested_function_calls() {
        let expr = Expression::builtin(
            BuiltinName::ToIri,
            [
                Expression::builtin(
                    BuiltinName::Concat,
                    [Expression::constant("people/"), Expression::reference("name")],
                ),
                Expression::constant("http://example.org/"),
            ],
        );
        assert_eq!(
            expr.evaluate(&tuple()),
            Value::from(NamedNode::new_unchecked("http://example.org/people/alice"))
        );
    }

    #[test]
    fn test_undefined_propagates_through_calls() {
        let expr = Expression::builtin(
            BuiltinName::ToLiteral,
            [
                Expression::builtin(
                    BuiltinName::Concat,
                    [Expression::constant("x"), Expression::reference("missing")],
                ),
                Expression::constant(NamedNode::from(xsd::STRING)),
            ],
        );
        assert_eq!(expr.evaluate(&tuple()), Value::Undefined);
    }

    #[test]
    fn test_call_by_name() {
        let registry = DefaultFunctionRegistry::new();
        let expr = Expression::call_by_name(
            &registry,
            "concat",
            [Expression::reference("name"), Expression::constant("!")],
        )
        .unwrap();
        assert_eq!(
            expr.evaluate(&tuple()),
            Value::from(Literal::new_string_literal("alice!"))
        );
        assert!(Expression::call_by_name(&registry, "unknown", []).is_err());
    }

    #[test]
    fn test_display() {
        let expr = Expression::builtin(
            BuiltinName::ToLiteral,
            [
                Expression::reference("id"),
                Expression::constant(NamedNode::from(xsd::INTEGER)),
            ],
        );
        assert_eq!(
            expr.to_string(),
            "to_literal(Ref(id), Const(<http://www.w3.org/2001/XMLSchema#integer>))"
        );
        assert_eq!(
            Expression::constant(Literal::new_string_literal("a")).to_string(),
            "Const(\"a\"^^<http://www.w3.org/2001/XMLSchema#string>)"
        );
    }
}
