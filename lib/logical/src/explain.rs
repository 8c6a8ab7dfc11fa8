//! Diagnostic views of operator trees.
//!
//! The text form is meant for humans, while the structured form can be serialized (e.g., to
//! JSON) for tooling. Neither view takes part in the execution of an operator.

use crate::expr::Expression;
use crate::{MappingOperator, MappingResult};
use itertools::Itertools;
use rdf_mapping_model::{Term, Value};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// The structured explanation of an operator and its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorExplanation {
    #[serde(rename = "type")]
    pub operator_type: &'static str,
    /// The type that implements the source access of a Source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_class: Option<&'static str>,
    pub parameters: OperatorParameters,
    /// The input of a single-input operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<OperatorExplanation>>,
    /// The inputs of a union.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OperatorExplanation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<OperatorExplanation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<OperatorExplanation>>,
}

impl OperatorExplanation {
    fn new(operator_type: &'static str, parameters: OperatorParameters) -> Self {
        Self {
            operator_type,
            operator_class: None,
            parameters,
            parent: None,
            children: Vec::new(),
            left: None,
            right: None,
        }
    }
}

/// The configuration of an operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperatorParameters {
    Source {
        source: String,
        iterator: String,
        /// Attribute to selector, in declaration order.
        attribute_mappings: serde_json::Map<String, serde_json::Value>,
    },
    Extend {
        new_attribute: String,
        expression: ExpressionExplanation,
    },
    Project {
        attributes: Vec<String>,
    },
    Union {
        operator_count: usize,
    },
    EquiJoin {
        join_conditions: Vec<JoinConditionExplanation>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinConditionExplanation {
    pub left: String,
    pub right: String,
}

/// The structured explanation of an expression tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ExpressionExplanation {
    /// `value_type` names the kind of the value (e.g., `String` or `IRI`). For terms, `value`
    /// holds the IRI, the blank node identifier, or the lexical form.
    Constant {
        value_type: &'static str,
        value: serde_json::Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },
    Reference {
        attribute: String,
    },
    FunctionCall {
        function: String,
        arguments: Vec<ExpressionExplanation>,
    },
}

impl From<&Expression> for ExpressionExplanation {
    fn from(expression: &Expression) -> Self {
        match expression {
            Expression::Constant(value) => explain_constant(value),
            Expression::Reference(attribute) => ExpressionExplanation::Reference {
                attribute: attribute.clone(),
            },
            Expression::FunctionCall(call) => ExpressionExplanation::FunctionCall {
                function: call.function_name().to_string(),
                arguments: call.args().iter().map(ExpressionExplanation::from).collect(),
            },
        }
    }
}

fn explain_constant(value: &Value) -> ExpressionExplanation {
    let json_value = match value {
        Value::String(value) => serde_json::Value::from(value.as_str()),
        Value::Integer(value) => serde_json::Value::from(*value),
        Value::Float(value) => serde_json::Value::from(*value),
        Value::Boolean(value) => serde_json::Value::from(*value),
        Value::Null | Value::Undefined => serde_json::Value::Null,
        Value::Term(term) => serde_json::Value::from(term.as_str()),
    };
    let datatype = match value {
        Value::Term(Term::Literal(literal)) => literal.datatype().map(|dt| dt.as_str().to_owned()),
        _ => None,
    };
    ExpressionExplanation::Constant {
        value_type: value.kind_name(),
        value: json_value,
        datatype,
    }
}

impl MappingOperator {
    /// Returns the structured explanation of this operator tree.
    pub fn explanation(&self) -> OperatorExplanation {
        match self {
            MappingOperator::Source(node) => OperatorExplanation {
                operator_class: Some(node.source().type_name()),
                ..OperatorExplanation::new(
                    self.name(),
                    OperatorParameters::Source {
                        source: node.source().kind().to_owned(),
                        iterator: node.iterator().to_owned(),
                        attribute_mappings: node
                            .attribute_mappings()
                            .iter()
                            .map(|mapping| {
                                (
                                    mapping.attribute.clone(),
                                    serde_json::Value::from(mapping.selector.as_str()),
                                )
                            })
                            .collect(),
                    },
                )
            },
            MappingOperator::Extend(node) => OperatorExplanation {
                parent: Some(Box::new(node.parent().explanation())),
                ..OperatorExplanation::new(
                    self.name(),
                    OperatorParameters::Extend {
                        new_attribute: node.attribute().to_owned(),
                        expression: ExpressionExplanation::from(node.expression()),
                    },
                )
            },
            MappingOperator::Project(node) => OperatorExplanation {
                parent: Some(Box::new(node.parent().explanation())),
                ..OperatorExplanation::new(
                    self.name(),
                    OperatorParameters::Project {
                        attributes: node.attributes().to_vec(),
                    },
                )
            },
            MappingOperator::Union(node) => OperatorExplanation {
                children: node
                    .children()
                    .iter()
                    .map(|child| child.explanation())
                    .collect(),
                ..OperatorExplanation::new(
                    self.name(),
                    OperatorParameters::Union {
                        operator_count: node.children().len(),
                    },
                )
            },
            MappingOperator::EquiJoin(node) => OperatorExplanation {
                left: Some(Box::new(node.left().explanation())),
                right: Some(Box::new(node.right().explanation())),
                ..OperatorExplanation::new(
                    self.name(),
                    OperatorParameters::EquiJoin {
                        join_conditions: node
                            .conditions()
                            .map(|(left, right)| JoinConditionExplanation {
                                left: left.to_owned(),
                                right: right.to_owned(),
                            })
                            .collect(),
                    },
                )
            },
        }
    }

    /// Returns the structured explanation of this operator tree as JSON.
    pub fn explain_json(&self) -> MappingResult<serde_json::Value> {
        Ok(serde_json::to_value(self.explanation())?)
    }

    /// Returns the human-readable explanation of this operator tree.
    pub fn explain(&self) -> String {
        self.to_string()
    }

    fn explain_lines(&self, indent: usize, lines: &mut Vec<String>) {
        let field = |name: &str, value: &dyn Display| format!("{:indent$}  {name}: {value}", "");
        let label = |name: &str| format!("{:indent$}  {name}:", "");

        lines.push(format!("{:indent$}{}(", "", self.name()));
        match self {
            MappingOperator::Source(node) => {
                let mappings = node
                    .attribute_mappings()
                    .iter()
                    .map(|mapping| format!("{}: {}", mapping.attribute, mapping.selector))
                    .join(", ");
                lines.push(field("source", &node.source().kind()));
                lines.push(field("iterator", &node.iterator()));
                lines.push(field("attribute_mappings", &format!("{{{mappings}}}")));
            }
            MappingOperator::Extend(node) => {
                lines.push(field("attribute", &node.attribute()));
                lines.push(field("expression", node.expression()));
                lines.push(label("parent"));
                node.parent().explain_lines(indent + 4, lines);
            }
            MappingOperator::Project(node) => {
                let attributes = node.attributes().join(", ");
                lines.push(field("attributes", &format!("[{attributes}]")));
                lines.push(label("parent"));
                node.parent().explain_lines(indent + 4, lines);
            }
            MappingOperator::Union(node) => {
                lines.push(field("operators", &node.children().len()));
                for (i, child) in node.children().iter().enumerate() {
                    lines.push(label(&format!("[{i}]")));
                    child.explain_lines(indent + 4, lines);
                }
            }
            MappingOperator::EquiJoin(node) => {
                let conditions = node
                    .conditions()
                    .map(|(left, right)| format!("{left} = {right}"))
                    .join(", ");
                lines.push(field("conditions", &conditions));
                lines.push(label("left"));
                node.left().explain_lines(indent + 4, lines);
                lines.push(label("right"));
                node.right().explain_lines(indent + 4, lines);
            }
        }
        lines.push(format!("{:indent$})", ""));
    }
}

impl Display for MappingOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.explain_lines(0, &mut lines);
        f.write_str(&lines.join("\n"))
    }
}
