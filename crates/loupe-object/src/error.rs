/// Errors from decoding object identifiers and envelopes.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The identifier is not valid hexadecimal.
    #[error("invalid hex in object id: {0}")]
    InvalidHex(String),

    /// The identifier has the wrong length.
    #[error("object id must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A separator pattern failed to compile.
    #[error("invalid separator pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The decompressed bytes do not form a valid envelope.
    #[error("malformed object: {0}")]
    Malformed(String),
}

/// Result alias for decode operations.
pub type ParseResult<T> = Result<T, ParseError>;
