use core::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiExpError {
    #[error("Length Error: {0} bases but {1} scalars")]
    LengthMismatch(usize, usize),
    #[error("Chunk count must be at least 1")]
    ZeroChunks,
    #[error("Unknown multi-exponentiation method: {0}")]
    UnknownMethod(String),
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnvValue { var: &'static str, value: String },
}
