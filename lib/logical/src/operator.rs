use crate::expr::Expression;
use crate::extend::ExtendNode;
use crate::join::EquiJoinNode;
use crate::project::ProjectNode;
use crate::source::SourceNode;
use crate::union::UnionNode;
use crate::{ExecutionOptions, MappingResult};
use rdf_mapping_model::MappingRelation;

/// An operator of the mapping algebra.
///
/// Operators are immutable after construction. Executing an operator recursively executes its
/// children and fully materializes the result. Nothing is cached, so executing the same tree
/// twice evaluates the sources twice and yields equal relations.
#[derive(Debug, Clone)]
pub enum MappingOperator {
    Source(SourceNode),
    Extend(ExtendNode),
    Project(ProjectNode),
    Union(UnionNode),
    EquiJoin(EquiJoinNode),
}

impl MappingOperator {
    /// Returns the name of the operator kind.
    pub fn name(&self) -> &'static str {
        match self {
            MappingOperator::Source(_) => "Source",
            MappingOperator::Extend(_) => "Extend",
            MappingOperator::Project(_) => "Project",
            MappingOperator::Union(_) => "Union",
            MappingOperator::EquiJoin(_) => "EquiJoin",
        }
    }

    /// Executes the operator with the default [ExecutionOptions].
    pub fn execute(&self) -> MappingResult<MappingRelation> {
        self.execute_with(&ExecutionOptions::default())
    }

    /// Executes the operator with the given `options`.
    pub fn execute_with(&self, options: &ExecutionOptions) -> MappingResult<MappingRelation> {
        match self {
            MappingOperator::Source(node) => node.execute(),
            MappingOperator::Extend(node) => node.execute(options),
            MappingOperator::Project(node) => node.execute(options),
            MappingOperator::Union(node) => node.execute(options),
            MappingOperator::EquiJoin(node) => node.execute(options),
        }
    }

    /// Wraps this operator in an [ExtendNode] that binds `attribute` to `expression`.
    #[must_use]
    pub fn extend(self, attribute: impl Into<String>, expression: Expression) -> Self {
        MappingOperator::Extend(ExtendNode::new(self, attribute, expression))
    }
}

impl From<SourceNode> for MappingOperator {
    fn from(value: SourceNode) -> Self {
        MappingOperator::Source(value)
    }
}

impl From<ExtendNode> for MappingOperator {
    fn from(value: ExtendNode) -> Self {
        MappingOperator::Extend(value)
    }
}

impl From<ProjectNode> for MappingOperator {
    fn from(value: ProjectNode) -> Self {
        MappingOperator::Project(value)
    }
}

impl From<UnionNode> for MappingOperator {
    fn from(value: UnionNode) -> Self {
        MappingOperator::Union(value)
    }
}

impl From<EquiJoinNode> for MappingOperator {
    fn from(value: EquiJoinNode) -> Self {
        MappingOperator::EquiJoin(value)
    }
}
