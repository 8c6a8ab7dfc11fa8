use crate::FunctionName;
use rdf_mapping_model::{Iri, Value};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

/// A result of invoking a [MappingFunction].
pub type FunctionResult<T> = Result<T, FunctionError>;

/// An error raised by a [MappingFunction].
///
/// These errors never leave the evaluation of a function call expression. There, they are
/// converted into [Value::Undefined].
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    /// The function was called with an unsupported number of arguments.
    #[error("Function '{name}' expects {expected} arguments, got {actual}.")]
    InvalidArity {
        name: FunctionName,
        expected: FunctionArity,
        actual: usize,
    },
    /// No function with the given name is known.
    #[error("Unknown function '{name}'.")]
    UnknownFunction { name: String },
    /// The function itself failed.
    #[error("Function '{name}' failed: {source}")]
    Execution {
        name: FunctionName,
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },
}

/// The number of arguments a function accepts.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FunctionArity {
    /// Exactly this many arguments.
    Fixed(usize),
    /// Between `min` and `max` arguments (both inclusive).
    Range(usize, usize),
    /// At least this many arguments.
    AtLeast(usize),
}

impl FunctionArity {
    pub fn accepts(self, number_of_args: usize) -> bool {
        match self {
            FunctionArity::Fixed(n) => number_of_args == n,
            FunctionArity::Range(min, max) => (min..=max).contains(&number_of_args),
            FunctionArity::AtLeast(min) => number_of_args >= min,
        }
    }
}

impl Display for FunctionArity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArity::Fixed(n) => write!(f, "{n}"),
            FunctionArity::Range(min, max) => write!(f, "{min} to {max}"),
            FunctionArity::AtLeast(min) => write!(f, "at least {min}"),
        }
    }
}

/// A function that can be called from a mapping expression.
///
/// Functions receive the already evaluated arguments. Inputs that the function cannot interpret
/// should produce [Value::Undefined]. Returning an error is reserved for actual failures; callers
/// treat both the same way.
pub trait MappingFunction: Debug + Send + Sync {
    /// Returns the name of the function.
    fn name(&self) -> &FunctionName;

    /// Returns the number of arguments the function accepts.
    fn arity(&self) -> FunctionArity;

    /// Invokes the function.
    fn invoke(&self, args: &[Value]) -> FunctionResult<Value>;

    /// Checks whether `args` conforms to the arity of this function.
    fn check_arity(&self, args: &[Value]) -> FunctionResult<()> {
        let arity = self.arity();
        if arity.accepts(args.len()) {
            Ok(())
        } else {
            Err(FunctionError::InvalidArity {
                name: self.name().clone(),
                expected: arity,
                actual: args.len(),
            })
        }
    }
}

/// A reference-counted pointer to a [MappingFunction].
pub type MappingFunctionRef = Arc<dyn MappingFunction>;

type CustomFunctionImpl =
    dyn Fn(&[Value]) -> Result<Value, Box<dyn Error + Send + Sync + 'static>> + Send + Sync;

/// A [MappingFunction] backed by a closure.
///
/// # Example
///
/// ```
/// use rdf_mapping_functions::{CustomFunction, FunctionArity, MappingFunction};
/// use rdf_mapping_model::{Iri, Value};
///
/// let upper = CustomFunction::new(
///     Iri::parse("http://example.com/fn/upper".to_owned()).unwrap(),
///     FunctionArity::Fixed(1),
///     |args| match &args[0] {
///         Value::String(value) => Ok(Value::String(value.to_uppercase())),
///         _ => Ok(Value::Undefined),
///     },
/// );
/// assert_eq!(upper.invoke(&[Value::from("a")]).unwrap(), Value::from("A"));
/// ```
#[derive(Clone)]
pub struct CustomFunction {
    name: FunctionName,
    arity: FunctionArity,
    implementation: Arc<CustomFunctionImpl>,
}

impl CustomFunction {
    /// Creates a new [CustomFunction].
    pub fn new<F>(name: Iri<String>, arity: FunctionArity, implementation: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Box<dyn Error + Send + Sync + 'static>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: FunctionName::Custom(name),
            arity,
            implementation: Arc::new(implementation),
        }
    }
}

impl Debug for CustomFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl MappingFunction for CustomFunction {
    fn name(&self) -> &FunctionName {
        &self.name
    }

    fn arity(&self) -> FunctionArity {
        self.arity
    }

    fn invoke(&self, args: &[Value]) -> FunctionResult<Value> {
        self.check_arity(args)?;
        (self.implementation)(args).map_err(|source| FunctionError::Execution {
            name: self.name.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing() -> CustomFunction {
        CustomFunction::new(
            Iri::parse("http://example.com/fn/fail".to_owned()).unwrap(),
            FunctionArity::Fixed(1),
            |_| Err("boom".into()),
        )
    }

    #[test]
    fn test_arity_accepts() {
        assert!(FunctionArity::Fixed(2).accepts(2));
        assert!(!FunctionArity::Fixed(2).accepts(3));
        assert!(FunctionArity::Range(1, 2).accepts(1));
        assert!(!FunctionArity::Range(1, 2).accepts(0));
        assert!(FunctionArity::AtLeast(2).accepts(5));
    }

    #[test]
    fn test_custom_function_error() {
        let result = failing().invoke(&[Value::Integer(1)]);
        let Err(FunctionError::Execution { source, .. }) = result else {
            panic!("expected an execution error");
        };
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn test_custom_function_arity() {
        let result = failing().invoke(&[]);
        assert!(matches!(
            result,
            Err(FunctionError::InvalidArity { actual: 0, .. })
        ));
    }
}
