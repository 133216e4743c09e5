use thiserror::Error;

/// Top-level error type for the etchpath geometry kernel.
#[derive(Debug, Error)]
pub enum EtchError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("at least {required} points required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while loading or validating transform settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Convenience type alias for results using [`EtchError`].
pub type Result<T> = std::result::Result<T, EtchError>;
