//! Domain error types.

/// Top-level error type for blackhawk.
#[derive(Debug, thiserror::Error)]
pub enum BlackhawkError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("series length mismatch: expected {expected} entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data in {path}")]
    NoData { path: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&BlackhawkError> for std::process::ExitCode {
    fn from(err: &BlackhawkError) -> Self {
        let code: u8 = match err {
            BlackhawkError::Io(_) => 1,
            BlackhawkError::ConfigParse { .. }
            | BlackhawkError::ConfigMissing { .. }
            | BlackhawkError::ConfigInvalid { .. } => 2,
            BlackhawkError::Data { .. } => 3,
            BlackhawkError::InvalidInput { .. } | BlackhawkError::LengthMismatch { .. } => 4,
            BlackhawkError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
