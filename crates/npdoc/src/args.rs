use std::path::PathBuf;

use clap::{Parser, Subcommand};

use npdoc_linter::logging::LogLevel;

#[derive(Debug, Parser)]
#[command(
    author,
    name = "npdoc",
    about = "npdoc: a structural linter for NumPyDoc-style docstrings",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    #[clap(flatten)]
    pub log_level_args: LogLevelArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the docstrings of the given modules' public callables.
    Check(CheckCommand),
    /// List public functions whose docstrings lack an 'Examples' section.
    MissingExamples(MissingExamplesCommand),
    /// Display npdoc's version.
    Version,
}

#[derive(Debug, clap::Args)]
pub struct CheckCommand {
    /// Dotted module identifiers to check. Defaults to every module the
    /// surface directory describes, in sorted order.
    pub modules: Vec<String>,
    /// Directory containing the exported module-surface documents
    /// (`<module>.json`).
    #[arg(long, value_name = "DIR")]
    pub surface_dir: PathBuf,
    /// Ignore a missing 'Returns' section.
    #[arg(short = 'r', long)]
    pub ignore_missing_returns: bool,
    /// Ignore case discrepancies in the 'See Also' section title.
    #[arg(short = 's', long)]
    pub ignore_see_also_case: bool,
    /// Also check the public methods of exported classes.
    #[arg(long)]
    pub include_classes: bool,
    /// Module-qualified name to skip (e.g. a known re-export); repeatable.
    #[arg(long, value_name = "NAME")]
    pub skip: Vec<String>,
    /// Exit with status code "0", even upon detecting issues.
    #[arg(long)]
    pub exit_zero: bool,
}

#[derive(Debug, clap::Args)]
pub struct MissingExamplesCommand {
    /// Dotted module identifiers to check. Defaults to every module the
    /// surface directory describes, in sorted order.
    pub modules: Vec<String>,
    /// Directory containing the exported module-surface documents
    /// (`<module>.json`).
    #[arg(long, value_name = "DIR")]
    pub surface_dir: PathBuf,
    /// Module-qualified name to skip (e.g. a known re-export); repeatable.
    #[arg(long, value_name = "NAME")]
    pub skip: Vec<String>,
    /// Exit with status code "0", even upon detecting issues.
    #[arg(long)]
    pub exit_zero: bool,
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default, clap::Args)]
pub struct LogLevelArgs {
    /// Enable verbose logging.
    #[arg(short, long, global = true, group = "verbosity")]
    pub verbose: bool,
    /// Print findings, but nothing else.
    #[arg(short, long, global = true, group = "verbosity")]
    pub quiet: bool,
    /// Disable all output.
    #[arg(long, global = true, group = "verbosity")]
    pub silent: bool,
}

impl From<&LogLevelArgs> for LogLevel {
    fn from(args: &LogLevelArgs) -> Self {
        if args.silent {
            Self::Silent
        } else if args.quiet {
            Self::Quiet
        } else if args.verbose {
            Self::Verbose
        } else {
            Self::Default
        }
    }
}
