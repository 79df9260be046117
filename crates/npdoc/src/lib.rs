#![allow(clippy::print_stdout)]

use std::process::ExitCode;

use anyhow::Result;

use npdoc_linter::logging::{set_up_logging, LogLevel};

use crate::args::{Args, Command};

pub mod args;
mod commands;
mod printer;

#[derive(Copy, Clone)]
pub enum ExitStatus {
    /// Checking was successful and there were no findings.
    Success,
    /// Checking was successful but there were findings.
    Failure,
    /// Checking failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn run(
    Args {
        command,
        log_level_args,
    }: Args,
) -> Result<ExitStatus> {
    let log_level = LogLevel::from(&log_level_args);
    set_up_logging(log_level)?;

    match command {
        Command::Version => {
            commands::version::version();
            Ok(ExitStatus::Success)
        }
        Command::Check(args) => commands::check::check(&args, log_level),
        Command::MissingExamples(args) => {
            commands::missing_examples::missing_examples(&args, log_level)
        }
    }
}
