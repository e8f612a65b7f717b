use thiserror::Error;

/// Failure converting raw data into a vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("slice of length {actual} is too short for a {expected}-component vector")]
    SliceTooShort { expected: usize, actual: usize },

    #[error("packed vector needs exactly {expected} bytes, got {actual}")]
    ByteLength { expected: usize, actual: usize },
}
