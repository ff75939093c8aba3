//! Error types for the swing engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwingError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error(
        "Singular configuration at theta1={theta1}, theta2={theta2} (denominator {denominator:e})"
    )]
    SingularConfiguration {
        theta1: f64,
        theta2: f64,
        denominator: f64,
    },

    #[error("Non-finite state: {0}")]
    NonFiniteState(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SwingError {
    /// True for errors raised by the integrator at a particular phase point.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularConfiguration { .. })
    }
}

pub type Result<T> = std::result::Result<T, SwingError>;
