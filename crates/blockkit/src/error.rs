use thiserror::Error;

use crate::kind::Kind;

/// Top-level error for building, serializing and parsing documents.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownDiscriminator(#[from] UnknownDiscriminator),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    #[error(transparent)]
    Hydration(#[from] HydrationError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Hydration(HydrationError::InvalidJson(err.to_string()))
    }
}

/// A structural or value rule was violated by a node.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("invalid {node}: {kind}")]
pub struct ValidationError {
    /// Kind of the node that detected the violation.
    pub node: Kind,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(node: Kind, kind: ValidationErrorKind) -> Self {
        Self { node, kind }
    }
}

/// The violated rule, with the bounds or values needed to explain it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationErrorKind {
    /// A required field is not set.
    #[error("must contain \"{0}\"")]
    MissingField(&'static str),

    /// None of a set of alternative fields is set.
    #[error("must contain at least one of: {}", fields.join(", "))]
    MissingOneOf { fields: &'static [&'static str] },

    /// A collection has fewer entries than allowed.
    #[error("must contain at least {min} \"{what}\"")]
    TooFew { what: &'static str, min: usize },

    /// A collection has more entries than allowed.
    #[error("must not contain more than {max} \"{what}\"")]
    TooMany { what: &'static str, max: usize },

    /// A string is shorter than allowed (counted in characters).
    #[error("\"{field}\" must have a length of at least {min}")]
    TooShort { field: &'static str, min: usize },

    /// A string is longer than allowed (counted in characters).
    #[error("\"{field}\" must have a length of at most {max}")]
    TooLong { field: &'static str, max: usize },

    /// Two fields that exclude each other are both set, or neither is.
    #[error("must provide \"{first}\" or \"{second}\", but not both")]
    Exclusive {
        first: &'static str,
        second: &'static str,
    },

    /// Identifiers that must be unique among siblings are repeated.
    #[error("the following {field} values are duplicated: {}", ids.join(", "))]
    Duplicated { field: &'static str, ids: Vec<String> },

    /// A child of this kind cannot be placed in the given slot.
    #[error("{child} is not supported as \"{slot}\"")]
    KindNotAllowed { child: Kind, slot: &'static str },

    /// A field is only meaningful under specific parent kinds.
    #[error("\"{field}\" can only be used in {allowed}")]
    FieldNotAllowed {
        field: &'static str,
        allowed: &'static str,
    },

    /// A field has a value outside its domain.
    #[error("invalid \"{field}\": {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ValidationErrorKind {
    /// Attach the kind of the node that detected this violation.
    pub fn at(self, node: Kind) -> ValidationError {
        ValidationError::new(node, self)
    }
}

/// A `type` value has no registered kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown \"type\" discriminator: {discriminator}")]
pub struct UnknownDiscriminator {
    pub discriminator: String,
}

/// A resolved kind is not acceptable where it was found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {resolved}")]
pub struct TypeMismatch {
    pub resolved: Kind,
    pub expected: &'static str,
}

/// Malformed input structure encountered while hydrating.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HydrationError {
    /// The object has no `type` key and nothing implies its kind.
    #[error("missing \"type\" discriminator for {expected}")]
    MissingDiscriminator { expected: &'static str },

    /// The `type` key holds something other than a string.
    #[error("\"type\" discriminator must be a string, got {found}")]
    InvalidDiscriminator { found: &'static str },

    /// The `type` key names a different kind than the node being hydrated.
    #[error("\"type\" {found} does not match {kind}")]
    KindConflict { found: String, kind: Kind },

    /// A field is present but holds the wrong JSON shape.
    #[error("field \"{field}\" must be {expected}, got {found}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A field holds a string outside its enumerated values.
    #[error("field \"{field}\" has unsupported value {value:?}")]
    UnsupportedValue { field: String, value: String },

    /// A node was expected but the input is not a JSON object.
    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}
