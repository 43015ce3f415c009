use std::io::Read;

use serde::Deserialize;

use crate::error::{Result, TaskError};

/// Environment variable the task runner hands the payload through.
pub const PAYLOAD_VAR: &str = "TASK_PAYLOAD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Taken from `--payload` or `TASK_PAYLOAD`.
    Inline(Option<String>),
    Stdin,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Payload {
    pub name: String,
}

impl Payload {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(source: PayloadSource, mut stdin: impl Read) -> Result<Self> {
        let raw = match source {
            PayloadSource::Inline(Some(raw)) => raw,
            PayloadSource::Inline(None) => return Err(TaskError::missing_payload()),
            PayloadSource::Stdin => {
                let mut buf = String::new();
                stdin.read_to_string(&mut buf)?;
                buf
            }
        };
        Self::parse(&raw)
    }
}
