use alloc::string::String;

/// The two failure kinds a [`CollectionError`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument has the wrong type for the operation, e.g. a non-integer index.
    InvalidArgument,
    /// The argument has the right type but lies outside the valid bounds.
    ArgumentOutOfRange,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("argument `{name}` is out of range: {value} is not within {min}..={max}")]
    ArgumentOutOfRange {
        name: &'static str,
        value: i128,
        min: i128,
        max: i128,
    },
}

impl CollectionError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::ArgumentOutOfRange { .. } => ErrorKind::ArgumentOutOfRange,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) const fn out_of_range(name: &'static str, value: i128, min: i128, max: i128) -> Self {
        Self::ArgumentOutOfRange {
            name,
            value,
            min,
            max,
        }
    }
}

pub type Result<Success, Failure = CollectionError> = core::result::Result<Success, Failure>;
