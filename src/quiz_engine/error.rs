use thiserror::Error;

/// Host facts that cannot be turned into a [`FactSnapshot`](crate::FactSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("serial number must be 6 characters, got {0}")]
    SerialLength(usize),
    #[error("serial number character {ch:?} at position {position} is not alphanumeric")]
    SerialCharacter { position: usize, ch: char },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse module config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_questions must be at least 1")]
    NoQuestions,
    #[error("{0} must be at least 1")]
    ZeroTrialCap(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("button {0} does not exist (expected 0..=2)")]
    InvalidButton(usize),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
