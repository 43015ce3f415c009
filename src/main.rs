mod config;
mod error;
mod greeter;
mod logging;
mod output;
mod payload;
mod task;

use std::io;

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "greeter",
    version,
    about = "Greet the name carried in the TASK_PAYLOAD environment variable"
)]
struct Cli {
    #[command(flatten)]
    config: config::TaskConfig,
}

/// Exit status for failures outside the greeting rule: unreadable or
/// malformed payload, broken streams.
const INFRASTRUCTURE_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&cli.config);

    let result = {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        task::run(&cli.config, io::stdin().lock(), &mut stdout, &mut stderr)
    };

    match result.context("greeter task failed") {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            output::print_error(&format!("Error: {e:?}"));
            std::process::exit(INFRASTRUCTURE_EXIT);
        }
    }
}
