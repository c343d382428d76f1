/// Errors that can occur while synthesizing a compiler configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller contract breach: empty or absolute config path, or direct
    /// sources that are not a subsequence of the full input set.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A flag combination with no defined meaning. Currently never produced
    /// by `synthesize` (the strict-deps overlap is resolved by precedence);
    /// ambiguous future flag combinations fail closed through this variant.
    #[error("Conflicting flags: {0}")]
    ConflictingFlag(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for synthesis operations
pub type Result<T> = std::result::Result<T, Error>;
