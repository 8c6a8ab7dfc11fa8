use crate::join::algorithms::{hash_join, nested_loop_join, JoinKey};
use crate::{
    ExecutionOptions, JoinAlgorithm, JoinSide, MappingError, MappingOperator, MappingResult,
};
use rdf_mapping_model::{MappingRelation, MappingTuple};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// A logical node that represents an inner equi-join.
///
/// A left and a right tuple match if, for every join condition `(a, b)`, the value of `a` in the
/// left tuple is equal to the value of `b` in the right tuple. Every match yields the union of
/// both tuples. The attribute sets of the left and the right relation must be disjoint.
#[derive(Debug, Clone)]
pub struct EquiJoinNode {
    left: Arc<MappingOperator>,
    right: Arc<MappingOperator>,
    left_attributes: Vec<String>,
    right_attributes: Vec<String>,
}

impl EquiJoinNode {
    /// Creates a new [EquiJoinNode].
    ///
    /// Returns an error if the attribute lists differ in length or are empty.
    pub fn try_new(
        left: impl Into<Arc<MappingOperator>>,
        right: impl Into<Arc<MappingOperator>>,
        left_attributes: impl IntoIterator<Item = impl Into<String>>,
        right_attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> MappingResult<Self> {
        let left_attributes = left_attributes
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let right_attributes = right_attributes
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        if left_attributes.len() != right_attributes.len() {
            return Err(MappingError::JoinKeyLengthMismatch {
                left: left_attributes.len(),
                right: right_attributes.len(),
            });
        }
        if left_attributes.is_empty() {
            return Err(MappingError::EmptyJoinKeys);
        }

        Ok(Self {
            left: left.into(),
            right: right.into(),
            left_attributes,
            right_attributes,
        })
    }

    /// Returns the left input.
    pub fn left(&self) -> &MappingOperator {
        &self.left
    }

    /// Returns the right input.
    pub fn right(&self) -> &MappingOperator {
        &self.right
    }

    /// Returns the join attributes of the left input.
    pub fn left_attributes(&self) -> &[String] {
        &self.left_attributes
    }

    /// Returns the join attributes of the right input.
    pub fn right_attributes(&self) -> &[String] {
        &self.right_attributes
    }

    /// Returns the join conditions as `(left, right)` attribute pairs.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.left_attributes
            .iter()
            .map(String::as_str)
            .zip(self.right_attributes.iter().map(String::as_str))
    }

    /// Materializes both inputs and joins them.
    ///
    /// All structural checks happen before the first tuple is emitted.
    pub fn execute(&self, options: &ExecutionOptions) -> MappingResult<MappingRelation> {
        let left = self.left.execute_with(options)?;
        let right = self.right.execute_with(options)?;
        ensure_disjoint(&left, &right)?;

        let left_keys = join_keys(&left, &self.left_attributes, JoinSide::Left)?;
        let right_keys = join_keys(&right, &self.right_attributes, JoinSide::Right)?;
        let matches = match options.join_algorithm {
            JoinAlgorithm::Hash => hash_join(&left_keys, &right_keys),
            JoinAlgorithm::NestedLoop => nested_loop_join(&left_keys, &right_keys),
        };

        let result = matches
            .into_iter()
            .map(|(left_idx, right_idx)| left[left_idx].merge(&right[right_idx]))
            .collect::<MappingRelation>();
        debug!(
            operator = "EquiJoin",
            algorithm = ?options.join_algorithm,
            left = left.len(),
            right = right.len(),
            tuples = result.len(),
            "Executed operator"
        );
        Ok(result)
    }
}

/// Checks that no attribute appears in both relations, considering every tuple.
fn ensure_disjoint(left: &[MappingTuple], right: &[MappingTuple]) -> MappingResult<()> {
    let left_attributes = left
        .iter()
        .flat_map(MappingTuple::attributes)
        .collect::<BTreeSet<_>>();
    let shared = right
        .iter()
        .flat_map(MappingTuple::attributes)
        .filter(|attribute| left_attributes.contains(attribute))
        .collect::<BTreeSet<_>>();

    if shared.is_empty() {
        Ok(())
    } else {
        Err(MappingError::JoinAttributesNotDisjoint {
            attributes: shared.into_iter().map(str::to_owned).collect(),
        })
    }
}

fn join_keys<'tuple>(
    relation: &'tuple [MappingTuple],
    attributes: &[String],
    side: JoinSide,
) -> MappingResult<Vec<JoinKey<'tuple>>> {
    relation
        .iter()
        .map(|tuple| {
            attributes
                .iter()
                .map(|attribute| {
                    tuple
                        .get(attribute)
                        .ok_or_else(|| MappingError::MissingJoinAttribute {
                            side,
                            attribute: attribute.clone(),
                            tuple: tuple.to_string(),
                        })
                })
                .collect::<MappingResult<JoinKey<'tuple>>>()
        })
        .collect()
}
