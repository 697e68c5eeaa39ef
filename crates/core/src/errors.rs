use thiserror::Error;

/// Validation failures for inbound form submissions.
///
/// Shape and type errors (missing fields, negative counts) are rejected by
/// deserialization before these checks run; this taxonomy covers the
/// constraints the wire types cannot express.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid email address: `{0}`")]
    InvalidEmail(String),
}
