//! Errors raised while parsing signatures and encoding proposal calldata.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The signature has no parameter group or its parentheses do not balance.
    #[error("malformed signature {signature:?}: {reason}")]
    MalformedSignature { signature: String, reason: String },

    #[error("expected as many params as signatures: {signatures} signatures, {params} params")]
    LengthMismatch { signatures: usize, params: usize },

    #[error("command {index}: signature declares {expected} arguments, got {got}")]
    ArgumentCount {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("command {index}: invalid ABI type {ty:?}")]
    InvalidType { index: usize, ty: String },

    /// An argument could not be coerced to its declared ABI type.
    #[error("command {index}: cannot encode argument as {ty}: {reason}")]
    Coerce {
        index: usize,
        ty: String,
        reason: String,
    },

    #[error("cannot serialize proposal meta: {0}")]
    Description(String),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
