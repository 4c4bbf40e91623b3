use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgebraError>;

#[derive(Debug, Error)]
pub enum AlgebraError {
    #[error("normalization error at {position}: unexpected `{offending}`")]
    Normalization { offending: String, position: usize },
    #[error("parse error at {position}: {message}")]
    Parse { position: usize, message: String },
    #[error("domain error: {0}")]
    Domain(String),
    #[error("unsolvable: {0}")]
    Unsolvable(String),
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
}

impl AlgebraError {
    pub(crate) fn normalization(offending: impl Into<String>, position: usize) -> Self {
        AlgebraError::Normalization {
            offending: offending.into(),
            position,
        }
    }

    pub(crate) fn unsolvable(reason: impl Into<String>) -> Self {
        AlgebraError::Unsolvable(reason.into())
    }

    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        AlgebraError::Domain(reason.into())
    }
}
