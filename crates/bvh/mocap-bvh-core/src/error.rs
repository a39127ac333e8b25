//! Error type for the parsing core.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BvhError>;

/// Failure modes of a BVH parse.
///
/// Every syntactic failure — malformed syntax, unexpected end of input,
/// numeric overflow, an unsupported channel count — maps to
/// [`BvhError::Malformed`]; a partially populated document is never
/// exposed. Callers must treat any error as "the document is unusable".
#[derive(thiserror::Error, Debug)]
pub enum BvhError {
    /// The input could not be read (or decoded as UTF-8) before parsing.
    #[error("failed to read BVH input: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not match the BVH grammar.
    #[error("malformed BVH document")]
    Malformed,
}
