use crate::SpeakerId;

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("speaker not found: {0}")]
    SpeakerNotFound(SpeakerId),
}
