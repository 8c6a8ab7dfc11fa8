use crate::expr::Expression;
use rdf_mapping_functions::builtin::create_builtin;
use rdf_mapping_functions::{BuiltinName, FunctionName, MappingFunctionRef};
use rdf_mapping_model::{MappingTuple, Value};
use std::any::Any;
use std::fmt::{self, Display, Formatter};
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// The application of a function to a list of argument expressions.
///
/// Errors returned by the function and panics raised inside it are contained here: they are
/// logged and the call evaluates to [Value::Undefined].
#[derive(Debug, Clone)]
pub struct FunctionCall {
    function: MappingFunctionRef,
    args: Vec<Expression>,
}

impl FunctionCall {
    /// Creates a new [FunctionCall].
    pub fn new(function: MappingFunctionRef, args: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            function,
            args: args.into_iter().collect(),
        }
    }

    /// Creates a new [FunctionCall] of the builtin `name`.
    pub fn builtin(name: BuiltinName, args: impl IntoIterator<Item = Expression>) -> Self {
        Self::new(create_builtin(name), args)
    }

    /// Returns the called function.
    pub fn function(&self) -> &MappingFunctionRef {
        &self.function
    }

    /// Returns the name of the called function.
    pub fn function_name(&self) -> &FunctionName {
        self.function.name()
    }

    /// Returns the argument expressions.
    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    /// Evaluates the arguments in order and invokes the function on the results.
    pub fn evaluate(&self, tuple: &MappingTuple) -> Value {
        let args = self
            .args
            .iter()
            .map(|arg| arg.evaluate(tuple))
            .collect::<Vec<_>>();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.function.invoke(&args)));
        match result {
            Ok(Ok(value)) => value,
            Ok(Err(error)) => {
                debug!(
                    function = %self.function.name(),
                    %error,
                    "Function call evaluates to undefined"
                );
                Value::Undefined
            }
            Err(payload) => {
                debug!(
                    function = %self.function.name(),
                    error = panic_message(payload.as_ref()),
                    "Function call panicked, evaluates to undefined"
                );
                Value::Undefined
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Two calls are equal if they call the function with the same name on equal arguments.
impl PartialEq for FunctionCall {
    fn eq(&self, other: &Self) -> bool {
        self.function.name() == other.function.name() && self.args == other.args
    }
}

impl Eq for FunctionCall {}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function.name())?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
