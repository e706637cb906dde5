use thiserror::Error;

use crate::proto::vectis::ErrorCode;
use crate::schema::FieldType;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("transport error: {0}")]
    Transport(#[from] tonic::Status),

    #[error("client is closed")]
    ClientClosed,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("service error ({code:?}): {reason}")]
    Service { code: ErrorCode, reason: String },

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    /// Build a service error from a wire status, mapping unknown codes to
    /// `UnexpectedError` rather than dropping them.
    pub(crate) fn from_status(status: crate::proto::vectis::Status) -> Self {
        let code = ErrorCode::try_from(status.error_code).unwrap_or(ErrorCode::UnexpectedError);
        Error::Service {
            code,
            reason: status.reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected wire kind for field '{field}': declared {declared:?}")]
    UnexpectedKind { field: String, declared: i32 },

    #[error("field data for '{0}' carries no payload")]
    MissingPayload(String),

    #[error("missing field '{0}' in response")]
    MissingField(String),

    #[error("row count mismatch for field '{field}': expected {expected}, got {actual}")]
    RowCountMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("value {value} does not fit in {target:?}")]
    IntegerOverflow { value: i64, target: FieldType },

    #[error("vector payload of {len} values does not divide by dimension {dim}")]
    DimensionMismatch { len: usize, dim: usize },

    #[error("unrecognized wire value '{value}' for '{key}'")]
    UnrecognizedValue { key: &'static str, value: String },
}
