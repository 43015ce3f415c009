use clap::{ArgAction, Args};

use crate::payload::PayloadSource;

/// Everything the task reads from flags and the environment. There is no
/// configuration file.
#[derive(Args, Debug, Clone)]
pub struct TaskConfig {
    /// JSON payload, normally handed over by the task runner
    #[arg(long, env = "TASK_PAYLOAD", hide_env_values = true)]
    pub payload: Option<String>,

    /// Read the payload from stdin instead of TASK_PAYLOAD
    #[arg(long, env = "TASK_PAYLOAD_STDIN")]
    pub stdin: bool,

    /// Task identifier, attached to log output
    #[arg(long, env = "TASK_ID", default_value = "local")]
    pub task_id: String,

    /// Print tasque marker lines before the result or error line
    #[arg(long, env = "TASK_MARKERS")]
    pub markers: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl TaskConfig {
    pub fn payload_source(&self) -> PayloadSource {
        if self.stdin {
            PayloadSource::Stdin
        } else {
            PayloadSource::Inline(self.payload.clone())
        }
    }

    /// Filter used when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        config: TaskConfig,
    }

    fn parse(args: &[&str]) -> TaskConfig {
        let argv = std::iter::once("greeter").chain(args.iter().copied());
        Harness::try_parse_from(argv).unwrap().config
    }

    #[test]
    fn payload_flag_is_inline_source() {
        let config = parse(&["--payload", r#"{"name":"x"}"#]);
        assert_eq!(
            config.payload_source(),
            PayloadSource::Inline(Some(r#"{"name":"x"}"#.to_string()))
        );
    }

    #[test]
    fn stdin_flag_overrides_payload() {
        let config = parse(&["--stdin", "--payload", "{}"]);
        assert_eq!(config.payload_source(), PayloadSource::Stdin);
    }

    #[test]
    fn verbosity_maps_to_level() {
        assert_eq!(parse(&["--payload", "{}"]).log_level(), "warn");
        assert_eq!(parse(&["--payload", "{}", "-v"]).log_level(), "info");
        assert_eq!(parse(&["--payload", "{}", "-vv"]).log_level(), "debug");
        assert_eq!(parse(&["--payload", "{}", "-vvvv"]).log_level(), "trace");
    }

    #[test]
    fn explicit_task_id_is_kept() {
        let config = parse(&["--payload", "{}", "--task-id", "job-7"]);
        assert_eq!(config.task_id, "job-7");
    }
}
