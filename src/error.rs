use thiserror::Error;

/// Errors raised while building or evaluating a network.
#[derive(Debug, Error)]
pub enum ApproxError {
    #[error("hidden_dim must be at least 1 (got {0})")]
    InvalidHiddenDim(usize),

    /// A matrix had the wrong number of features for the layer it was fed to.
    #[error("shape mismatch: expected {expected} features, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// A layer was asked to take zero inputs.
    #[error("layer must take at least one input feature")]
    ZeroFanIn,

    #[error("biases must be a single row (found {rows} rows)")]
    BiasNotRow { rows: usize },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApproxError>;
