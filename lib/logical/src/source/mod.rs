//! The leaf operator that reads a mapping relation from a source document.

use crate::{MappingError, MappingResult};
use itertools::Itertools;
use rdf_mapping_model::{MappingRelation, MappingTuple, Value};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Access to a source document.
///
/// Implementations hold the document and know how to evaluate selectors of their query language
/// against it. Both operations return empty sequences if a selector matches nothing. Errors are
/// reserved for selectors that cannot be evaluated at all (e.g., syntax errors).
pub trait SourceAccess: Debug + Send + Sync {
    /// A context object selected by the iterator selector.
    type Context<'doc>
    where
        Self: 'doc;

    /// A short name of the source kind (e.g., `json`).
    fn kind(&self) -> &str;

    /// Selects the context objects of the document, in document order.
    fn select_contexts<'doc>(&'doc self, selector: &str)
        -> MappingResult<Vec<Self::Context<'doc>>>;

    /// Extracts the values of `selector` relative to `context`, in document order.
    fn extract_values<'doc>(
        &'doc self,
        context: &Self::Context<'doc>,
        selector: &str,
    ) -> MappingResult<Vec<Value>>;
}

/// An object-safe view of a [SourceAccess].
///
/// Implemented for every [SourceAccess] so that [SourceNode] can hold any source regardless of
/// its context type.
pub trait DynSourceAccess: Debug + Send + Sync {
    /// A short name of the source kind.
    fn kind(&self) -> &str;

    /// The unqualified name of the implementing type (e.g., `JsonSource`).
    fn type_name(&self) -> &'static str;

    /// Computes the mapping relation for `iterator` and `attribute_mappings`.
    fn materialize(
        &self,
        iterator: &str,
        attribute_mappings: &[AttributeMapping],
    ) -> MappingResult<MappingRelation>;
}

impl<S: SourceAccess> DynSourceAccess for S {
    fn kind(&self) -> &str {
        SourceAccess::kind(self)
    }

    fn type_name(&self) -> &'static str {
        let path = std::any::type_name::<S>();
        let path = path.split('<').next().unwrap_or(path);
        path.rsplit("::").next().unwrap_or(path)
    }

    fn materialize(
        &self,
        iterator: &str,
        attribute_mappings: &[AttributeMapping],
    ) -> MappingResult<MappingRelation> {
        let mut result = Vec::new();
        for context in self.select_contexts(iterator)? {
            let values = attribute_mappings
                .iter()
                .map(|mapping| self.extract_values(&context, &mapping.selector))
                .collect::<MappingResult<Vec<_>>>()?;
            result.extend(cartesian_product(attribute_mappings, values));
        }
        Ok(result)
    }
}

/// A reference-counted pointer to a [DynSourceAccess].
pub type SourceAccessRef = Arc<dyn DynSourceAccess>;

/// Binds an attribute to the selector that extracts its values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeMapping {
    pub attribute: String,
    pub selector: String,
}

impl AttributeMapping {
    /// Creates a new [AttributeMapping].
    pub fn new(attribute: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            selector: selector.into(),
        }
    }
}

impl<A: Into<String>, S: Into<String>> From<(A, S)> for AttributeMapping {
    fn from((attribute, selector): (A, S)) -> Self {
        Self::new(attribute, selector)
    }
}

/// Emits one tuple per element of the Cartesian product of the per-attribute value lists.
///
/// An empty value list yields no tuples. Without any attributes, the context yields a single
/// empty tuple.
fn cartesian_product(
    attribute_mappings: &[AttributeMapping],
    values: Vec<Vec<Value>>,
) -> Vec<MappingTuple> {
    if attribute_mappings.is_empty() {
        return vec![MappingTuple::new()];
    }

    values
        .into_iter()
        .multi_cartesian_product()
        .map(|combination| {
            attribute_mappings
                .iter()
                .map(|mapping| mapping.attribute.as_str())
                .zip(combination)
                .collect::<MappingTuple>()
        })
        .collect()
}

/// A logical node that reads the base relation from a source.
///
/// For every context selected by `iterator`, the node extracts a list of values per attribute
/// and emits the Cartesian product of these lists. Contexts are processed in document order.
#[derive(Debug, Clone)]
pub struct SourceNode {
    source: SourceAccessRef,
    iterator: String,
    attribute_mappings: Vec<AttributeMapping>,
}

impl SourceNode {
    /// Creates a new [SourceNode].
    ///
    /// Returns an error if an attribute is mapped more than once.
    pub fn try_new(
        source: SourceAccessRef,
        iterator: impl Into<String>,
        attribute_mappings: impl IntoIterator<Item = impl Into<AttributeMapping>>,
    ) -> MappingResult<Self> {
        let attribute_mappings = attribute_mappings
            .into_iter()
            .map(Into::into)
            .collect::<Vec<AttributeMapping>>();

        if let Some(duplicate) = attribute_mappings
            .iter()
            .map(|mapping| mapping.attribute.as_str())
            .duplicates()
            .next()
        {
            return Err(MappingError::DuplicateSourceAttribute {
                attribute: duplicate.to_owned(),
            });
        }

        Ok(Self {
            source,
            iterator: iterator.into(),
            attribute_mappings,
        })
    }

    /// Returns the source.
    pub fn source(&self) -> &SourceAccessRef {
        &self.source
    }

    /// Returns the iterator selector.
    pub fn iterator(&self) -> &str {
        &self.iterator
    }

    /// Returns the attribute mappings, in declaration order.
    pub fn attribute_mappings(&self) -> &[AttributeMapping] {
        &self.attribute_mappings
    }

    /// Evaluates the selectors against the source. Nothing is cached between calls.
    pub fn execute(&self) -> MappingResult<MappingRelation> {
        let result = self
            .source
            .materialize(&self.iterator, &self.attribute_mappings)?;
        debug!(
            operator = "Source",
            kind = self.source.kind(),
            tuples = result.len(),
            "Executed operator"
        );
        Ok(result)
    }
}
