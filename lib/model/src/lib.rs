//! The data model of mapping relations: RDF terms, values, and mapping tuples.

mod error;
mod term;
mod tuple;
mod value;

pub use error::*;
pub use term::*;
pub use tuple::*;
pub use value::*;

// Re-export some oxrdf types.
pub use oxiri::{Iri, IriParseError};
pub use oxrdf::vocab;
pub use oxrdf::{BlankNode, BlankNodeRef, NamedNode, NamedNodeRef};
