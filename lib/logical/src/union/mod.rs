use crate::{ExecutionOptions, MappingError, MappingOperator, MappingResult};
use rdf_mapping_model::MappingRelation;
use std::sync::Arc;
use tracing::debug;

/// A logical node that concatenates the relations of its children.
///
/// This is a bag union. No duplicates are removed and the schemas of the children are not
/// required to match.
#[derive(Debug, Clone)]
pub struct UnionNode {
    children: Vec<Arc<MappingOperator>>,
}

impl UnionNode {
    /// Creates a new [UnionNode].
    ///
    /// Returns an error if `children` is empty.
    pub fn try_new(
        children: impl IntoIterator<Item = impl Into<Arc<MappingOperator>>>,
    ) -> MappingResult<Self> {
        let children = children.into_iter().map(Into::into).collect::<Vec<_>>();
        if children.is_empty() {
            return Err(MappingError::EmptyUnion);
        }
        Ok(Self { children })
    }

    /// Returns the child operators, in order.
    pub fn children(&self) -> &[Arc<MappingOperator>] {
        &self.children
    }

    pub fn execute(&self, options: &ExecutionOptions) -> MappingResult<MappingRelation> {
        let mut result = MappingRelation::new();
        for child in &self.children {
            result.extend(child.execute_with(options)?);
        }
        debug!(
            operator = "Union",
            children = self.children.len(),
            tuples = result.len(),
            "Executed operator"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::TableSource;
    use crate::source::SourceNode;
    use rdf_mapping_model::Value;

    fn single(attribute: &'static str, value: &str) -> MappingOperator {
        let source = TableSource::rows(vec![[(attribute, Value::from(value))]]);
        MappingOperator::Source(
            SourceNode::try_new(Arc::new(source), "$", [(attribute, attribute)]).unwrap(),
        )
    }

    #[test]
    fn test_union_is_concatenation() {
        let a = Arc::new(single("a", "1"));
        let b = Arc::new(single("b", "2"));
        let union = UnionNode::try_new([Arc::clone(&a), Arc::clone(&b)]).unwrap();

        let mut expected = a.execute().unwrap();
        expected.extend(b.execute().unwrap());
        assert_eq!(union.execute(&ExecutionOptions::default()).unwrap(), expected);
    }

    #[test]
    fn test_union_keeps_duplicates() {
        let union = UnionNode::try_new([single("a", "1"), single("a", "1")]).unwrap();
        let result = union.execute(&ExecutionOptions::default()).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], result[1]);
    }

    #[test]
    fn test_empty_union() {
        let result = UnionNode::try_new(Vec::<MappingOperator>::new());
        assert!(matches!(result, Err(MappingError::EmptyUnion)));
    }
}
