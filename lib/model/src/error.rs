use oxiri::IriParseError;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A light-weight result, mainly used inside the built-in functions.
pub type ThinResult<T> = Result<T, ThinError>;

/// A thin error type that indicates an *expected* failure without any reason.
///
/// Many conversions in a mapping can fail. For example, because an extracted value has a type that
/// cannot be turned into an IRI. These failures are part of regular evaluation and all of them end
/// up as the undefined value, so we do not need to store a reason.
#[derive(Clone, Copy, Debug, Default, Error, PartialEq, Eq)]
pub struct ThinError {}

impl ThinError {
    /// Creates a result with a [ThinError].
    pub fn expected<T>() -> ThinResult<T> {
        Err(ThinError::default())
    }
}

impl Display for ThinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("An expected error occurred.")
    }
}

macro_rules! implement_from {
    ($t:ty) => {
        impl From<$t> for ThinError {
            fn from(_: $t) -> Self {
                ThinError::default()
            }
        }
    };
}

implement_from!(IriParseError);
