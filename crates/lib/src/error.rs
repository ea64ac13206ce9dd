use thiserror::Error;

/// Errors produced while parsing or decoding faculty identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown building: {0}")]
    UnknownBuilding(String),

    #[error("invalid office number '{0}': expected three digits (000-999)")]
    InvalidOfficeNumber(String),

    #[error("malformed faculty ID '{id}': {reason}")]
    MalformedId { id: String, reason: &'static str },
}

impl Error {
    pub(crate) fn malformed_id(id: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedId {
            id: id.into(),
            reason,
        }
    }
}
