use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("{curve} {parameter} must be positive, got {value}")]
    InvalidParameter {
        curve: &'static str,
        parameter: &'static str,
        value: f64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CurveError {
    /// Whether this error comes from curve parameter validation.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
