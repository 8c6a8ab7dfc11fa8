use rdf_mapping_logical::{MappingError, MappingResult, SourceAccess};
use rdf_mapping_model::Value;
use serde_json::Value as JsonValue;
use serde_json_path::JsonPath;
use std::borrow::Cow;
use tracing::trace;

/// A source over an in-memory JSON document.
///
/// Iterator and attribute selectors are JSONPath expressions (RFC 9535). Attribute selectors are
/// evaluated against the selected context object. Selectors that do not start with `$` are
/// relative: `name`, `.name`, `[0]`, and `@.name` all address the current node.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rdf_mapping_logical::MappingPlanBuilder;
/// use rdf_mapping_sources::JsonSource;
/// use serde_json::json;
///
/// let source = JsonSource::new(json!({ "people": [{ "name": "Alice" }, { "name": "Bob" }] }));
/// let plan = MappingPlanBuilder::new_from_source(
///     Arc::new(source),
///     "$.people[*]",
///     [("name", "$.name")],
/// )
/// .unwrap()
/// .build();
///
/// assert_eq!(plan.execute().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSource {
    document: JsonValue,
}

impl JsonSource {
    /// The kind reported for JSON sources.
    pub const KIND: &'static str = "json";

    /// Creates a new [JsonSource] over `document`.
    pub fn new(document: JsonValue) -> Self {
        Self { document }
    }

    /// Parses `json` and creates a new [JsonSource] over the result.
    pub fn from_json_str(json: &str) -> MappingResult<Self> {
        let document = serde_json::from_str(json)
            .map_err(|error| MappingError::source_error(Self::KIND, error))?;
        Ok(Self::new(document))
    }

    /// Returns the document.
    pub fn document(&self) -> &JsonValue {
        &self.document
    }

    fn parse_path(selector: &str) -> MappingResult<JsonPath> {
        JsonPath::parse(&absolute_selector(selector))
            .map_err(|error| MappingError::source_error(Self::KIND, error))
    }
}

impl From<JsonValue> for JsonSource {
    fn from(value: JsonValue) -> Self {
        Self::new(value)
    }
}

impl SourceAccess for JsonSource {
    type Context<'doc> = &'doc JsonValue;

    fn kind(&self) -> &str {
        Self::KIND
    }

    fn select_contexts<'doc>(&'doc self, selector: &str) -> MappingResult<Vec<&'doc JsonValue>> {
        let contexts = Self::parse_path(selector)?.query(&self.document).all();
        for (idx, context) in contexts.iter().enumerate() {
            trace!(selector, idx, %context, "Selected context");
        }
        Ok(contexts)
    }

    fn extract_values<'doc>(
        &'doc self,
        context: &&'doc JsonValue,
        selector: &str,
    ) -> MappingResult<Vec<Value>> {
        let values = Self::parse_path(selector)?
            .query(context)
            .all()
            .into_iter()
            .flat_map(|node| match node {
                JsonValue::Array(elements) => {
                    elements.iter().filter_map(scalar_value).collect::<Vec<_>>()
                }
                node => scalar_value(node).into_iter().collect::<Vec<_>>(),
            })
            .collect();
        Ok(values)
    }
}

/// Rewrites a relative selector into one that starts at the root of the queried node.
fn absolute_selector(selector: &str) -> Cow<'_, str> {
    let selector = selector.trim();
    if selector.starts_with('$') {
        Cow::Borrowed(selector)
    } else if let Some(rest) = selector.strip_prefix('@') {
        Cow::Owned(format!("${rest}"))
    } else if selector.starts_with(['.', '[']) {
        Cow::Owned(format!("${selector}"))
    } else {
        Cow::Owned(format!("$.{selector}"))
    }
}

/// Converts a scalar JSON node into a [Value]. Objects and arrays are not scalars.
fn scalar_value(node: &JsonValue) -> Option<Value> {
    match node {
        JsonValue::Null => Some(Value::Null),
        JsonValue::Bool(value) => Some(Value::Boolean(*value)),
        JsonValue::Number(number) => number
            .as_i64()
            .map(Value::Integer)
            .or_else(|| number.as_f64().map(Value::Float)),
        JsonValue::String(value) => Some(Value::String(value.clone())),
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}
