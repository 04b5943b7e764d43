use thiserror::Error;

use crate::models::ParticipantId;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("participant not found: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("group not found: {0}")]
    UnknownGroup(String),

    #[error("unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            SessionError::Deserialization(err.to_string())
        } else {
            SessionError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
