use thiserror::Error;

/// Errors surfaced by the engine to games and the web bridge.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A JSON configuration blob could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// A capacity in the config is zero, which would produce an empty wire section.
    #[error("capacity `{0}` must be greater than zero")]
    ZeroCapacity(&'static str),

    /// A value, or a min/max pair, is outside the range the engine can use.
    #[error("`{0}` is out of range")]
    InvalidRange(&'static str),
}

pub type EngineResult<T> = Result<T, EngineError>;
