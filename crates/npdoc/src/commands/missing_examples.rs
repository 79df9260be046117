use std::io::{self, BufWriter, Write};

use anyhow::Result;
use log::debug;
use rustc_hash::FxHashSet;

use npdoc_linter::logging::LogLevel;
use npdoc_linter::rules::missing_examples::is_missing_examples;
use npdoc_linter::surface::provider::{JsonSurfaceProvider, SurfaceProvider};
use npdoc_linter::surface::public_surface;

use crate::args::MissingExamplesCommand;
use crate::printer::Printer;
use crate::ExitStatus;

/// Report public functions whose docstrings lack an `Examples` section.
///
/// Only plain functions are considered, never class methods. Per module,
/// flagged names are listed sorted, with a marker for functions that have no
/// docstring at all; a total follows at the end.
pub(crate) fn missing_examples(
    args: &MissingExamplesCommand,
    log_level: LogLevel,
) -> Result<ExitStatus> {
    let provider = JsonSurfaceProvider::new(&args.surface_dir);
    let modules = if args.modules.is_empty() {
        provider.modules()?
    } else {
        args.modules.clone()
    };
    let skip: FxHashSet<String> = args.skip.iter().cloned().collect();

    let mut writer = BufWriter::new(io::stdout());
    let printer = Printer::new(log_level);

    let mut total = 0;
    for module in &modules {
        debug!("loading surface for `{module}`");
        let surface = provider.load(module)?;
        let mut flagged: Vec<(String, bool)> = public_surface(&surface, false, &skip)
            .filter(|object| is_missing_examples(object.doc.as_deref()))
            .map(|object| (object.name, object.doc.is_none()))
            .collect();
        flagged.sort_unstable();
        total += flagged.len();
        printer.write_missing_examples(&mut writer, module, &flagged)?;
    }
    printer.write_missing_examples_total(&mut writer, total)?;
    writer.flush()?;

    if total > 0 && !args.exit_zero {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
