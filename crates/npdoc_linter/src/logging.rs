use anyhow::Result;
use colored::Colorize;
use log::Level;

/// Warn a user, with the bold styling the CLI uses for its own messages.
#[macro_export]
macro_rules! warn_user {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        let message = format!($($arg)*);
        log::warn!("{}", message.bold());
    }};
}

#[derive(Debug, Default, PartialOrd, Ord, PartialEq, Eq, Copy, Clone)]
pub enum LogLevel {
    /// No output, not even findings.
    Silent,
    /// Findings only, no log messages.
    Quiet,
    #[default]
    Default,
    /// Debug-level tracing of module loads and enumeration.
    Verbose,
}

impl LogLevel {
    const fn level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Default => log::LevelFilter::Info,
            LogLevel::Verbose => log::LevelFilter::Debug,
            LogLevel::Quiet | LogLevel::Silent => log::LevelFilter::Off,
        }
    }
}

pub fn set_up_logging(level: LogLevel) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| match record.level() {
            Level::Error => out.finish(format_args!(
                "{}{} {}",
                "error".red().bold(),
                ":".bold(),
                message
            )),
            Level::Warn => out.finish(format_args!(
                "{}{} {}",
                "warning".yellow().bold(),
                ":".bold(),
                message
            )),
            Level::Info | Level::Debug | Level::Trace => out.finish(format_args!(
                "{}[{}] {}",
                record.level().to_string().to_lowercase().dimmed(),
                record.target(),
                message
            )),
        })
        .level(level.level_filter())
        .chain(std::io::stderr())
        .apply()
        .map_err(Into::into)
}
