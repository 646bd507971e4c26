//! Error types for sea-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { position: usize, message: String },

    #[error("No <{tag}> element found")]
    BlockNotFound { tag: String },

    #[error("Replacement is not a single <{tag}> element: {reason}")]
    InvalidReplacement { tag: String, reason: String },
}

impl Error {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            position,
            message: message.into(),
        }
    }
}
