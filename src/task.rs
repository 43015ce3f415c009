use std::io::{Read, Write};

use tracing::{debug, info, info_span};

use crate::config::TaskConfig;
use crate::error::Result;
use crate::greeter::greet;
use crate::output::{self, Failure, Success};
use crate::payload::{Payload, PayloadSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Greeting written to stdout.
    Greeted,
    /// Name refused; structured error written to stderr.
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Greeted => 0,
            Self::Rejected => 1,
        }
    }
}

/// Loads the payload, greets, and reports. Infrastructure failures come
/// back as `Err` and are never written in the structured error shape.
pub fn run<R, O, E>(
    config: &TaskConfig,
    stdin: R,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<Outcome>
where
    R: Read,
    O: Write,
    E: Write,
{
    let span = info_span!("task", task_id = %config.task_id);
    let _enter = span.enter();

    let source = config.payload_source();
    match &source {
        PayloadSource::Inline(_) => debug!("reading payload from TASK_PAYLOAD"),
        PayloadSource::Stdin => debug!("reading payload from stdin"),
    }
    let payload = Payload::load(source, stdin)?;

    match greet(&payload.name) {
        Ok(text) => {
            info!("greeting produced");
            output::report_success(stdout, &Success { text }, config.markers)?;
            Ok(Outcome::Greeted)
        }
        Err(err) => {
            info!(error = err.kind(), "name rejected: {err}");
            output::report_failure(stderr, &Failure::from(&err), config.markers)?;
            Ok(Outcome::Rejected)
        }
    }
}
