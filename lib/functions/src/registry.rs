use crate::builtin::create_builtin;
use crate::{BuiltinName, FunctionError, FunctionName, FunctionResult, MappingFunctionRef};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// A reference-counted pointer to an implementation of the `FunctionRegistry` trait.
pub type FunctionRegistryRef = Arc<dyn FunctionRegistry>;

/// A registry that resolves function names to [MappingFunction](crate::MappingFunction)
/// instances.
pub trait FunctionRegistry: Debug + Send + Sync {
    /// Returns the function identified by `name`.
    fn create_function(&self, name: &FunctionName) -> FunctionResult<MappingFunctionRef>;

    /// Returns the function identified by the string form of its name. This is either the name of
    /// a builtin (e.g., `concat`) or the IRI of a custom function.
    fn create_function_by_name(&self, name: &str) -> FunctionResult<MappingFunctionRef> {
        let name = name.parse::<FunctionName>()?;
        self.create_function(&name)
    }
}

/// The default implementation of the `FunctionRegistry` trait.
///
/// The registry is pre-populated with all builtins. Custom functions can be added with
/// [DefaultFunctionRegistry::register]; registering a function under an existing name replaces
/// the previous one.
#[derive(Debug, Clone)]
pub struct DefaultFunctionRegistry {
    functions: FxHashMap<FunctionName, MappingFunctionRef>,
}

impl Default for DefaultFunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultFunctionRegistry {
    /// Creates a new [DefaultFunctionRegistry] that contains all builtins.
    pub fn new() -> Self {
        let functions = BuiltinName::ALL
            .into_iter()
            .map(|name| (FunctionName::Builtin(name), create_builtin(name)))
            .collect();
        Self { functions }
    }

    /// Registers `function` under its name.
    pub fn register(&mut self, function: MappingFunctionRef) {
        self.functions.insert(function.name().clone(), function);
    }

    /// Returns the names of all registered functions.
    pub fn function_names(&self) -> impl Iterator<Item = &FunctionName> {
        self.functions.keys()
    }
}

impl FunctionRegistry for DefaultFunctionRegistry {
    fn create_function(&self, name: &FunctionName) -> FunctionResult<MappingFunctionRef> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| FunctionError::UnknownFunction {
                name: name.to_string(),
            })
    }
}
