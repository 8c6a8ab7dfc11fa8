use oxrdf::vocab::xsd;
use oxrdf::{NamedNode, NamedNodeRef};
use std::fmt::{self, Write};

/// An RDF literal: a lexical form and an optional datatype IRI.
///
/// Unlike [oxrdf::Literal], a literal without a datatype is kept distinct from an `xsd:string`
/// literal. Two literals are equal iff both their lexical forms and their datatypes are equal.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Literal {
    lexical_form: String,
    datatype: Option<NamedNode>,
}

impl Literal {
    /// Creates a literal tagged with `datatype`.
    pub fn new_typed_literal(
        lexical_form: impl Into<String>,
        datatype: impl Into<NamedNode>,
    ) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Some(datatype.into()),
        }
    }

    /// Creates a literal that carries no datatype.
    pub fn new_untyped_literal(lexical_form: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: None,
        }
    }

    /// Creates an `xsd:string` literal.
    pub fn new_string_literal(lexical_form: impl Into<String>) -> Self {
        Self::new_typed_literal(lexical_form, xsd::STRING)
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn datatype(&self) -> Option<NamedNodeRef<'_>> {
        self.datatype.as_ref().map(NamedNode::as_ref)
    }

    /// Returns true iff the datatype is exactly `xsd:string`.
    pub fn is_string(&self) -> bool {
        self.datatype() == Some(xsd::STRING)
    }

    /// Returns the lexical form if this is an `xsd:string` literal.
    pub fn as_string(&self) -> Option<&str> {
        self.is_string().then_some(self.lexical_form.as_str())
    }
}

/// Writes the literal in N-Triples syntax.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted_str(&self.lexical_form, f)?;
        match &self.datatype {
            Some(datatype) => write!(f, "^^{datatype}"),
            None => Ok(()),
        }
    }
}

fn write_quoted_str(value: &str, f: &mut impl Write) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '\u{08}' => f.write_str("\\b"),
            '\t' => f.write_str("\\t"),
            '\n' => f.write_str("\\n"),
            '\u{0C}' => f.write_str("\\f"),
            '\r' => f.write_str("\\r"),
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            '\0'..='\u{1F}' | '\u{7F}' => write!(f, "\\u{:04X}", u32::from(c)),
            _ => f.write_char(c),
        }?;
    }
    f.write_char('"')
}
