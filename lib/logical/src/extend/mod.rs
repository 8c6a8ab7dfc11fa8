use crate::expr::Expression;
use crate::{ExecutionOptions, MappingOperator, MappingResult};
use rdf_mapping_model::MappingRelation;
use std::sync::Arc;
use tracing::debug;

/// A logical node that binds a new attribute to the result of an expression.
///
/// Every output tuple is a fresh copy of a parent tuple. If the parent tuple already has the
/// attribute, the copy overwrites it.
#[derive(Debug, Clone)]
pub struct ExtendNode {
    /// The input operator.
    parent: Arc<MappingOperator>,
    /// The attribute to bind.
    attribute: String,
    /// The expression to evaluate.
    expression: Expression,
}

impl ExtendNode {
    /// Creates a new [ExtendNode].
    pub fn new(
        parent: impl Into<Arc<MappingOperator>>,
        attribute: impl Into<String>,
        expression: Expression,
    ) -> Self {
        Self {
            parent: parent.into(),
            attribute: attribute.into(),
            expression,
        }
    }

    /// Returns the input operator.
    pub fn parent(&self) -> &MappingOperator {
        &self.parent
    }

    /// Returns the attribute to bind.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Returns the expression to evaluate.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn execute(&self, options: &ExecutionOptions) -> MappingResult<MappingRelation> {
        let result = self
            .parent
            .execute_with(options)?
            .iter()
            .map(|tuple| tuple.with_value(&self.attribute, self.expression.evaluate(tuple)))
            .collect::<MappingRelation>();
        debug!(
            operator = "Extend",
            attribute = self.attribute.as_str(),
            tuples = result.len(),
            "Executed operator"
        );
        Ok(result)
    }
}
