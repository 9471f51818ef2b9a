use thiserror::Error;

/// Failures surfaced while constructing an engine. Once an engine exists,
/// every input is handled by clamping or wrapping rather than by erroring.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid config: {reason}")]
    Config { reason: String },
}

impl EngineError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
