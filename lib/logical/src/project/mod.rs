use crate::{ExecutionOptions, MappingError, MappingOperator, MappingResult};
use itertools::Itertools;
use rdf_mapping_model::MappingRelation;
use std::sync::Arc;
use tracing::debug;

/// A logical node that restricts every tuple to a set of attributes.
///
/// Every tuple must contain all projected attributes. As relations may be heterogeneous, this
/// is checked for each tuple and the first violation aborts the execution. Duplicates created
/// by the restriction are retained.
#[derive(Debug, Clone)]
pub struct ProjectNode {
    /// The input operator.
    parent: Arc<MappingOperator>,
    /// The projected attributes, free of duplicates.
    attributes: Vec<String>,
}

impl ProjectNode {
    /// Creates a new [ProjectNode].
    ///
    /// Returns an error if `attributes` is empty. Duplicate attributes are ignored.
    pub fn try_new(
        parent: impl Into<Arc<MappingOperator>>,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> MappingResult<Self> {
        let attributes = attributes
            .into_iter()
            .map(Into::into)
            .unique()
            .collect::<Vec<String>>();
        if attributes.is_empty() {
            return Err(MappingError::EmptyProjection);
        }

        Ok(Self {
            parent: parent.into(),
            attributes,
        })
    }

    /// Returns the input operator.
    pub fn parent(&self) -> &MappingOperator {
        &self.parent
    }

    /// Returns the projected attributes.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn execute(&self, options: &ExecutionOptions) -> MappingResult<MappingRelation> {
        let attributes = || self.attributes.iter().map(String::as_str);

        let result = self
            .parent
            .execute_with(options)?
            .iter()
            .map(|tuple| {
                let missing = tuple.missing_attributes(attributes());
                if missing.is_empty() {
                    Ok(tuple.restrict(attributes()))
                } else {
                    Err(MappingError::ProjectMissingAttributes {
                        attributes: missing,
                        tuple: tuple.to_string(),
                    })
                }
            })
            .collect::<MappingResult<MappingRelation>>()?;
        debug!(
            operator = "Project",
            tuples = result.len(),
            "Executed operator"
        );
        Ok(result)
    }
}
