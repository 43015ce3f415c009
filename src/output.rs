use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::greeter::GreetError;

/// Line the tasque runner looks for before a child's result line on stdout.
pub const RESULT_MARKER: &str = "-=result=-";
/// Line the tasque runner looks for before a child's error line on stderr.
pub const ERROR_MARKER: &str = "-=error=-";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Success {
    pub text: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Failure {
    pub cause: String,
    pub error: String,
}

impl From<&GreetError> for Failure {
    fn from(err: &GreetError) -> Self {
        Self {
            cause: err.trace(),
            error: err.kind().to_string(),
        }
    }
}

fn write_record<W: Write, T: Serialize>(
    out: &mut W,
    record: &T,
    marker: Option<&str>,
) -> Result<()> {
    if let Some(marker) = marker {
        writeln!(out, "{marker}")?;
    }
    serde_json::to_writer(&mut *out, record).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn report_success<W: Write>(out: &mut W, success: &Success, markers: bool) -> Result<()> {
    write_record(out, success, markers.then_some(RESULT_MARKER))
}

pub fn report_failure<W: Write>(err: &mut W, failure: &Failure, markers: bool) -> Result<()> {
    write_record(err, failure, markers.then_some(ERROR_MARKER))
}

pub fn print_error(msg: &str) {
    use colored::Colorize;
    eprintln!("{}", msg.red());
}
