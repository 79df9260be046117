use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use npdoc::args::Args;
use npdoc::{run, ExitStatus};

pub fn main() -> ExitCode {
    let args = Args::parse_from(wild::args_os());

    match run(args) {
        Ok(code) => code.into(),
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                // This communicates that npdoc itself hard-errored (e.g. a
                // module surface failed to load), as opposed to findings.
                eprintln!("{}", "npdoc failed".red().bold());
                for cause in err.chain() {
                    eprintln!("  {} {cause}", "Cause:".bold());
                }
            }
            ExitStatus::Error.into()
        }
    }
}
