use thiserror::Error;

use crate::payload::PAYLOAD_VAR;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("no payload provided (set {var} or pass --payload)")]
    MissingPayload { var: &'static str },

    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaskError {
    pub fn missing_payload() -> Self {
        Self::MissingPayload { var: PAYLOAD_VAR }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
