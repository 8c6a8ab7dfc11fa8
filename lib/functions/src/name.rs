use crate::FunctionError;
use rdf_mapping_model::Iri;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifier for a function. Either it is a builtin of the mapping language or a custom function.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum FunctionName {
    /// A builtin function.
    Builtin(BuiltinName),
    /// A custom function, identified by an IRI.
    Custom(Iri<String>),
}

impl Display for FunctionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionName::Builtin(builtin) => builtin.fmt(f),
            FunctionName::Custom(name) => name.fmt(f),
        }
    }
}

/// Parses the name of a builtin (e.g., `to_iri`) or, otherwise, the IRI of a custom function.
impl FromStr for FunctionName {
    type Err = FunctionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(builtin) = value.parse::<BuiltinName>() {
            return Ok(FunctionName::Builtin(builtin));
        }

        Iri::parse(value.to_owned())
            .map(FunctionName::Custom)
            .map_err(|_| FunctionError::UnknownFunction {
                name: value.to_owned(),
            })
    }
}

impl From<BuiltinName> for FunctionName {
    fn from(value: BuiltinName) -> Self {
        FunctionName::Builtin(value)
    }
}

/// The builtin functions for constructing RDF terms.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum BuiltinName {
    ToIri,
    ToLiteral,
    Concat,
}

impl BuiltinName {
    /// All builtins, in registration order.
    pub const ALL: [BuiltinName; 3] = [
        BuiltinName::ToIri,
        BuiltinName::ToLiteral,
        BuiltinName::Concat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuiltinName::ToIri => "to_iri",
            BuiltinName::ToLiteral => "to_literal",
            BuiltinName::Concat => "concat",
        }
    }
}

impl Display for BuiltinName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinName {
    type Err = FunctionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BuiltinName::ALL
            .into_iter()
            .find(|builtin| builtin.as_str() == value)
            .ok_or_else(|| FunctionError::UnknownFunction {
                name: value.to_owned(),
            })
    }
}
