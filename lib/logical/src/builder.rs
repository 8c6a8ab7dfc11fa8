use crate::expr::Expression;
use crate::source::{AttributeMapping, SourceAccessRef, SourceNode};
use crate::{EquiJoinNode, ExtendNode, MappingOperator, MappingResult, ProjectNode, UnionNode};
use std::sync::Arc;

/// A convenient builder for programmatically creating mapping pipelines.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rdf_mapping_functions::BuiltinName;
/// use rdf_mapping_logical::{Expression, MappingPlanBuilder, SourceAccess, MappingResult};
/// use rdf_mapping_model::Value;
///
/// #[derive(Debug)]
/// struct Names(Vec<&'static str>);
///
/// impl SourceAccess for Names {
///     type Context<'doc> = &'doc str;
///
///     fn kind(&self) -> &str {
///         "names"
///     }
///
///     fn select_contexts<'doc>(&'doc self, _: &str) -> MappingResult<Vec<&'doc str>> {
///         Ok(self.0.clone())
///     }
///
///     fn extract_values<'doc>(&'doc self, name: &&'doc str, _: &str) -> MappingResult<Vec<Value>> {
///         Ok(vec![Value::from(*name)])
///     }
/// }
///
/// let plan = MappingPlanBuilder::new_from_source(
///     Arc::new(Names(vec!["alice", "bob"])),
///     "*",
///     [("name", "@")],
/// )
/// .unwrap()
/// .extend(
///     "greeting",
///     Expression::builtin(
///         BuiltinName::Concat,
///         [Expression::constant("Hello, "), Expression::reference("name")],
///     ),
/// )
/// .project(["greeting"])
/// .unwrap()
/// .build();
///
/// let result = plan.execute().unwrap();
/// assert_eq!(result.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MappingPlanBuilder {
    plan: MappingOperator,
}

impl MappingPlanBuilder {
    /// Creates a new [MappingPlanBuilder] starting from an existing `plan`.
    pub fn new(plan: MappingOperator) -> Self {
        Self { plan }
    }

    /// Creates a new [MappingPlanBuilder] starting from a source.
    pub fn new_from_source(
        source: SourceAccessRef,
        iterator: impl Into<String>,
        attribute_mappings: impl IntoIterator<Item = impl Into<AttributeMapping>>,
    ) -> MappingResult<Self> {
        let node = SourceNode::try_new(source, iterator, attribute_mappings)?;
        Ok(Self::new(MappingOperator::Source(node)))
    }

    /// Binds `attribute` to the result of `expression` for every tuple.
    #[must_use]
    pub fn extend(self, attribute: impl Into<String>, expression: Expression) -> Self {
        Self::new(MappingOperator::Extend(ExtendNode::new(
            self.plan, attribute, expression,
        )))
    }

    /// Restricts every tuple to `attributes`.
    pub fn project(
        self,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> MappingResult<Self> {
        let node = ProjectNode::try_new(self.plan, attributes)?;
        Ok(Self::new(MappingOperator::Project(node)))
    }

    /// Concatenates the current plan with `others`. The current plan comes first.
    pub fn union(
        self,
        others: impl IntoIterator<Item = impl Into<Arc<MappingOperator>>>,
    ) -> MappingResult<Self> {
        let children = std::iter::once(Arc::new(self.plan))
            .chain(others.into_iter().map(Into::into))
            .collect::<Vec<_>>();
        let node = UnionNode::try_new(children)?;
        Ok(Self::new(MappingOperator::Union(node)))
    }

    /// Joins the current plan (left) with `right`.
    pub fn equi_join(
        self,
        right: impl Into<Arc<MappingOperator>>,
        left_attributes: impl IntoIterator<Item = impl Into<String>>,
        right_attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> MappingResult<Self> {
        let node = EquiJoinNode::try_new(self.plan, right, left_attributes, right_attributes)?;
        Ok(Self::new(MappingOperator::EquiJoin(node)))
    }

    /// Returns the plan built so far.
    pub fn build(self) -> MappingOperator {
        self.plan
    }
}

impl From<MappingOperator> for MappingPlanBuilder {
    fn from(value: MappingOperator) -> Self {
        Self::new(value)
    }
}
