use ark_serialize::SerializationError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("entropy source failed to produce randomness")]
    EntropyFailure,
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("unsupported range bit width {0}")]
    UnsupportedBitWidth(usize),
    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),
    #[error("range proof rejected: {0}")]
    RangeProofInvalid(&'static str),
    #[error("sigma proof rejected at statement {statement}")]
    SigmaProofInvalid { statement: usize },
    #[error("sigma proof challenge does not match its statements and commitments")]
    SigmaChallengeMismatch,
    #[error("malformed encoding: {0}")]
    DecodingError(&'static str),
}

impl From<SerializationError> for Error {
    fn from(e: SerializationError) -> Self {
        match e {
            SerializationError::NotEnoughSpace => Self::DecodingError("not enough space"),
            SerializationError::InvalidData => Self::DecodingError("invalid data"),
            SerializationError::UnexpectedFlags => Self::DecodingError("unexpected flags"),
            SerializationError::IoError(_) => Self::DecodingError("truncated input"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
