use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// No 2D context could be acquired for this draw cycle.
    #[error("drawing surface unavailable, wheel not drawn")]
    SurfaceUnavailable,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("cannot spin an empty wheel")]
    EmptyWheel,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WheelError {
    #[error("name at position {index} is blank")]
    InvalidName { index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed wheel config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid wheel config: {0}")]
    Invalid(&'static str),
}
