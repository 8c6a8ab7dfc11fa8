use crate::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A finite sequence of [MappingTuple]s.
///
/// A relation has bag semantics (duplicates are retained) and does not enforce a common schema
/// across its tuples.
pub type MappingRelation = Vec<MappingTuple>;

/// A single row of a mapping relation: a partial function from attribute names to [Value]s.
///
/// Attribute names are unique. The order of the attributes carries no meaning; iteration happens
/// in lexicographic attribute order to keep diagnostics stable. Tuples are never changed after
/// they have been handed out by an operator. Operators that "modify" a tuple create a new one
/// (see [MappingTuple::with_value], [MappingTuple::restrict], and [MappingTuple::merge]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MappingTuple {
    values: BTreeMap<String, Value>,
}

impl MappingTuple {
    /// Creates a tuple without any attribute.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `attribute`, if any.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.values.get(attribute)
    }

    pub fn contains_attribute(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }

    /// Returns the attribute names of this tuple.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy of this tuple with `attribute` bound to `value`. An existing binding of
    /// `attribute` is overwritten in the copy.
    #[must_use]
    pub fn with_value(&self, attribute: impl Into<String>, value: Value) -> Self {
        let mut values = self.values.clone();
        values.insert(attribute.into(), value);
        Self { values }
    }

    /// Returns the attributes of `attributes` that are not bound in this tuple, in the order of
    /// `attributes`.
    pub fn missing_attributes<'attr>(
        &self,
        attributes: impl IntoIterator<Item = &'attr str>,
    ) -> Vec<String> {
        attributes
            .into_iter()
            .filter(|attribute| !self.contains_attribute(attribute))
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Returns a new tuple that only contains the bindings of `attributes`. Attributes that are not
    /// bound in this tuple are ignored.
    #[must_use]
    pub fn restrict<'attr>(&self, attributes: impl IntoIterator<Item = &'attr str>) -> Self {
        let values = attributes
            .into_iter()
            .filter_map(|attribute| {
                self.values
                    .get_key_value(attribute)
                    .map(|(key, value)| (key.clone(), value.clone()))
            })
            .collect();
        Self { values }
    }

    /// Returns a new tuple with the bindings of both tuples. If both tuples bind the same
    /// attribute, the binding of `other` wins.
    #[must_use]
    pub fn merge(&self, other: &MappingTuple) -> Self {
        let mut values = self.values.clone();
        values.extend(
            other
                .values
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MappingTuple {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let values = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { values }
    }
}

impl<'tuple> IntoIterator for &'tuple MappingTuple {
    type Item = (&'tuple String, &'tuple Value);
    type IntoIter = btree_map::Iter<'tuple, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MappingTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (attribute, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attribute}: {value}")?;
        }
        f.write_str("}")
    }
}
