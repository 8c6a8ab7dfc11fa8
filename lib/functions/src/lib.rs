//! Functions that can be called from mapping expressions.
//!
//! The crate provides the [MappingFunction] abstraction, the builtins for constructing RDF terms
//! (`to_iri`, `to_literal`, and `concat`), and a [FunctionRegistry] for resolving function names.

pub mod builtin;
mod function;
mod name;
mod registry;

pub use function::*;
pub use name::*;
pub use registry::*;
