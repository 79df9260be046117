use std::io::{self, BufWriter, Write};

use anyhow::Result;
use log::debug;
use rustc_hash::FxHashSet;

use npdoc_linter::linter::check_docstring;
use npdoc_linter::logging::LogLevel;
use npdoc_linter::schema::NUMPY_SECTIONS;
use npdoc_linter::settings::Settings;
use npdoc_linter::surface::provider::{JsonSurfaceProvider, SurfaceProvider};
use npdoc_linter::surface::public_surface;

use crate::args::CheckCommand;
use crate::printer::Printer;
use crate::ExitStatus;

pub(crate) fn check(args: &CheckCommand, log_level: LogLevel) -> Result<ExitStatus> {
    let provider = JsonSurfaceProvider::new(&args.surface_dir);
    let modules = if args.modules.is_empty() {
        provider.modules()?
    } else {
        args.modules.clone()
    };
    if modules.is_empty() {
        npdoc_linter::warn_user!(
            "no module surfaces found in `{}`",
            provider.root().display()
        );
    }
    let settings = Settings {
        ignore_missing_returns: args.ignore_missing_returns,
        ignore_see_also_case: args.ignore_see_also_case,
    };
    let skip: FxHashSet<String> = args.skip.iter().cloned().collect();

    let mut writer = BufWriter::new(io::stdout());
    let printer = Printer::new(log_level);

    let mut any_findings = false;
    for module in &modules {
        debug!("loading surface for `{module}`");
        let surface = provider.load(module)?;
        printer.write_module_header(&mut writer, module)?;
        for object in public_surface(&surface, args.include_classes, &skip) {
            let checks = check_docstring(object.doc.as_deref(), NUMPY_SECTIONS, &settings);
            if !checks.is_empty() {
                any_findings = true;
                printer.write_object(&mut writer, module, &object.name, &checks)?;
            }
        }
    }
    writer.flush()?;

    if any_findings && !args.exit_zero {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
