use std::error::Error;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// A result of constructing or executing a mapping operator.
pub type MappingResult<T> = Result<T, MappingError>;

/// A structural error of a mapping pipeline.
///
/// These errors indicate that the pipeline itself is misconfigured. Data that cannot be
/// interpreted never raises a [MappingError]; it produces the undefined value instead.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Project: attributes [{}] are missing from tuple {tuple}.", .attributes.join(", "))]
    ProjectMissingAttributes {
        attributes: Vec<String>,
        tuple: String,
    },
    #[error("Project: the attribute set must not be empty.")]
    EmptyProjection,
    #[error("Union: at least one operator is required.")]
    EmptyUnion,
    #[error(
        "EquiJoin: the number of left attributes ({left}) does not match the number of right attributes ({right})."
    )]
    JoinKeyLengthMismatch { left: usize, right: usize },
    #[error("EquiJoin: at least one join condition is required.")]
    EmptyJoinKeys,
    #[error("EquiJoin: attributes [{}] appear on both sides of the join.", .attributes.join(", "))]
    JoinAttributesNotDisjoint { attributes: Vec<String> },
    #[error("EquiJoin: the {side} join attribute '{attribute}' is missing from tuple {tuple}.")]
    MissingJoinAttribute {
        side: JoinSide,
        attribute: String,
        tuple: String,
    },
    #[error("Source: the attribute '{attribute}' is mapped more than once.")]
    DuplicateSourceAttribute { attribute: String },
    #[error("Source ({kind}): {source}")]
    Source {
        kind: String,
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },
    #[error("Could not serialize the explanation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MappingError {
    /// Wraps an error raised by a source with the given `kind`.
    pub fn source_error(
        kind: impl Into<String>,
        error: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        MappingError::Source {
            kind: kind.into(),
            source: error.into(),
        }
    }
}

/// A side of an equi-join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinSide {
    Left,
    Right,
}

impl Display for JoinSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JoinSide::Left => f.write_str("left"),
            JoinSide::Right => f.write_str("right"),
        }
    }
}
