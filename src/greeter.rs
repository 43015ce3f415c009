use std::panic::Location;

use thiserror::Error;

/// The one name this task refuses to greet.
pub const FORBIDDEN_NAME: &str = "petia";

pub const GREETING_PREFIX: &str = "hello ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreetError {
    #[error("{message}")]
    Argument {
        message: String,
        location: &'static Location<'static>,
    },
}

impl GreetError {
    /// Records the caller's source location as the failure site.
    #[track_caller]
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// Category label reported in the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Argument { .. } => "ArgumentException",
        }
    }

    /// Diagnostic trace reported in the `cause` field.
    pub fn trace(&self) -> String {
        match self {
            Self::Argument { message, location } => format!(
                "Error: {message}\n    at greet ({}:{}:{})",
                location.file(),
                location.line(),
                location.column()
            ),
        }
    }
}

pub fn greet(name: &str) -> Result<String, GreetError> {
    if name == FORBIDDEN_NAME {
        return Err(GreetError::argument("Incorrect name"));
    }
    Ok(format!("{GREETING_PREFIX}{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_plain_name() {
        assert_eq!(greet("world").unwrap(), "hello world");
    }

    #[test]
    fn greets_empty_name() {
        assert_eq!(greet("").unwrap(), "hello ");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(greet("Petia").unwrap(), "hello Petia");
        assert_eq!(greet("PETIA").unwrap(), "hello PETIA");
    }

    #[test]
    fn input_is_kept_verbatim() {
        assert_eq!(greet(" petia ").unwrap(), "hello  petia ");
        assert_eq!(greet("petia\n").unwrap(), "hello petia\n");
    }

    #[test]
    fn rejects_forbidden_name() {
        let err = greet(FORBIDDEN_NAME).unwrap_err();
        assert_eq!(err.kind(), "ArgumentException");
        assert_eq!(err.to_string(), "Incorrect name");
    }

    #[test]
    fn trace_names_failure_site() {
        let err = greet("petia").unwrap_err();
        let trace = err.trace();
        assert!(trace.starts_with("Error: Incorrect name\n    at greet ("));
        assert!(trace.contains("greeter.rs:"));
        assert!(!trace.ends_with('\n'));
    }
}
