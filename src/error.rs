//! Error types for record handling
use std::fmt;

/// Result type for record operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("{kind} already exists under key {key}")]
    AlreadyExists { kind: &'static str, key: String },
    #[error("store error: {0}")]
    Store(String),
    #[error("codec error: {0}")]
    Codec(String),
}

/// Field-level validation failures. Each variant names the offending field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} has invalid value {value:?}: must be one of [{}]", .allowed.join(", "))]
    NotPermitted {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("{first} and {second} must be different (both are {value:?})")]
    MustDiffer {
        first: &'static str,
        second: &'static str,
        value: String,
    },
    #[error("{field} is required when {condition}")]
    RequiredWhen {
        field: &'static str,
        condition: String,
    },
    #[error("{field} must be {rule}, got {value}")]
    OutOfRange {
        field: &'static str,
        rule: &'static str,
        value: String,
    },
    #[error("{earlier} must not be later than {later}")]
    OutOfOrder {
        earlier: &'static str,
        later: &'static str,
    },
    #[error("malformed {field}: {reason}")]
    Malformed { field: String, reason: String },
}

/// Lifecycle state machine rejections
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("invalid target status {requested:?} for {entity}: must be one of [{}]", .allowed.join(", "))]
    InvalidTarget {
        entity: &'static str,
        requested: String,
        allowed: &'static [&'static str],
    },
    #[error("{entity} already in status {status:?}")]
    AlreadyInStatus { entity: &'static str, status: String },
    #[error("{entity} status {status:?} is terminal: no transitions allowed")]
    Terminal { entity: &'static str, status: String },
    #[error("{entity} cannot transition from {from:?} to {to:?}")]
    NotPermitted {
        entity: &'static str,
        from: String,
        to: String,
    },
}

/// Coarse classification used by whatever boundary wraps the record layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Transition(TransitionError::InvalidTarget { .. }) => ErrorKind::Validation,
            Error::Transition(_) => ErrorKind::Conflict,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::AlreadyExists { .. } => ErrorKind::Conflict,
            Error::Store(_) | Error::Codec(_) => ErrorKind::Internal,
        }
    }
}

impl ErrorKind {
    /// HTTP-equivalent status code
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

impl From<sled::Error> for Error {
    fn from(err: sled::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl<E: fmt::Display> From<minicbor::encode::Error<E>> for Error {
    fn from(err: minicbor::encode::Error<E>) -> Self {
        Error::Codec(err.to_string())
    }
}

impl From<minicbor::decode::Error> for Error {
    fn from(err: minicbor::decode::Error) -> Self {
        Error::Codec(err.to_string())
    }
}
