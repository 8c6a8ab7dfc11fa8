//! The operator algebra of mapping relations.
//!
//! A mapping pipeline is a tree of [MappingOperator]s. The leaves are sources that read tuples from
//! a document, while inner operators extend, project, union, and join the relations of their
//! children. Pipelines can be constructed directly from the node types or with the
//! [MappingPlanBuilder].

mod builder;
mod error;
mod explain;
mod expr;
pub mod extend;
pub mod join;
mod operator;
mod options;
pub mod project;
pub mod source;
pub mod union;

pub use builder::MappingPlanBuilder;
pub use error::*;
pub use explain::*;
pub use expr::{Expression, FunctionCall};
pub use extend::ExtendNode;
pub use join::EquiJoinNode;
pub use operator::MappingOperator;
pub use options::*;
pub use project::ProjectNode;
pub use source::{AttributeMapping, DynSourceAccess, SourceAccess, SourceAccessRef, SourceNode};
pub use union::UnionNode;
