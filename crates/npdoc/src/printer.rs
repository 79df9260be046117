use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use npdoc_linter::checks::{CheckCode, CheckKind};
use npdoc_linter::logging::LogLevel;

pub(crate) struct Printer {
    log_level: LogLevel,
}

impl Printer {
    pub(crate) const fn new(log_level: LogLevel) -> Self {
        Self { log_level }
    }

    pub(crate) fn write_module_header(&self, writer: &mut impl Write, module: &str) -> Result<()> {
        if self.log_level == LogLevel::Silent {
            return Ok(());
        }
        writeln!(writer)?;
        writeln!(writer, "=== {} ===", module.bold())?;
        Ok(())
    }

    /// Write one flagged object: its qualified name, then one indented line
    /// per check, with duplicated imports grouped into a trailing block.
    pub(crate) fn write_object(
        &self,
        writer: &mut impl Write,
        module: &str,
        name: &str,
        checks: &[CheckKind],
    ) -> Result<()> {
        if self.log_level == LogLevel::Silent {
            return Ok(());
        }
        writeln!(writer, "{module}.{name}")?;
        for check in checks {
            if check.code() == CheckCode::IMP002 {
                continue;
            }
            writeln!(writer, "    {}", check.body())?;
        }
        let duplicates: Vec<&str> = checks
            .iter()
            .filter_map(|check| match check {
                CheckKind::DuplicateImport(line) => Some(line.as_str()),
                _ => None,
            })
            .collect();
        if !duplicates.is_empty() {
            writeln!(writer, "    duplicated imports in Examples:")?;
            for line in duplicates {
                writeln!(writer, "        {line}")?;
            }
        }
        Ok(())
    }

    /// Write one module's functions lacking an `Examples` section: a header
    /// with the count, then the sorted names, marking functions that carry
    /// no docstring at all. Modules with nothing flagged stay silent.
    pub(crate) fn write_missing_examples(
        &self,
        writer: &mut impl Write,
        module: &str,
        flagged: &[(String, bool)],
    ) -> Result<()> {
        if self.log_level == LogLevel::Silent || flagged.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{} ({})", module.bold(), flagged.len())?;
        for (name, undocumented) in flagged {
            if *undocumented {
                writeln!(writer, "    {name} \t[no docstring]")?;
            } else {
                writeln!(writer, "    {name}")?;
            }
        }
        Ok(())
    }

    pub(crate) fn write_missing_examples_total(
        &self,
        writer: &mut impl Write,
        total: usize,
    ) -> Result<()> {
        if self.log_level == LogLevel::Silent {
            return Ok(());
        }
        writeln!(writer)?;
        writeln!(writer, "Found {total} functions")?;
        Ok(())
    }
}
