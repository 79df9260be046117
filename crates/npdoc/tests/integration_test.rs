use std::fs;
use std::path::Path;

use assert_cmd::Command;

const BIN_NAME: &str = "npdoc";

const INTEGRATE_SURFACE: &str = r#"{
    "name": "integrate",
    "exports": [
        {
            "name": "quad",
            "kind": "callable",
            "doc": "Compute a definite integral.\n\nParameters\n----------\nf : callable\n\nReturns\n-------\nfloat\n"
        },
        {
            "name": "trapezoid",
            "kind": "callable",
            "doc": "Integrate along the given axis.\n\nParameters\n----------\ny : array_like\n\nExamples\n--------\n>>> np.arange(6)\n"
        },
        {
            "name": "simpson",
            "kind": "callable",
            "doc": "Integrate using Simpson's rule.\n\nParameters\n----------\ny : array_like\n\nReturns\n-------\nfloat\n\nExamples\n--------\n>>> import numpy as np\n>>> import numpy as np\n>>> np.sum([1])\n"
        },
        {
            "name": "OdeSolver",
            "kind": "type",
            "doc": "Base class for ODE solvers.\n",
            "attrs": [
                {"name": "step", "callable": true},
                {"name": "t", "callable": false},
                {"name": "_advance", "callable": true}
            ]
        }
    ]
}"#;

const CLEAN_SURFACE: &str = r#"{
    "name": "fft",
    "exports": [
        {
            "name": "fft",
            "kind": "callable",
            "doc": "Compute the DFT.\n\nParameters\n----------\nx : array_like\n\nReturns\n-------\nout : complex ndarray\n\nExamples\n--------\n>>> import numpy as np\n>>> np.allclose([1.0], [1.0])\n"
        }
    ]
}"#;

const SIGNAL_SURFACE: &str = r#"{
    "name": "signal",
    "exports": [
        {
            "name": "lfilter",
            "kind": "callable",
            "doc": "Filter data along one dimension.\n\nExamples\n--------\n>>> import numpy as np\n"
        },
        {
            "name": "firwin",
            "kind": "callable",
            "doc": "FIR filter design using the window method.\n\nParameters\n----------\nnumtaps : int\n"
        },
        {
            "name": "cmplx_sort",
            "kind": "callable",
            "doc": "Sort roots based on magnitude.\n\n.. deprecated:: 1.12.0\n    `cmplx_sort` is deprecated and will be removed.\n"
        },
        {
            "name": "medfilt",
            "kind": "callable"
        },
        {
            "name": "ButterFilter",
            "kind": "type",
            "attrs": [
                {"name": "apply", "callable": true}
            ]
        },
        {
            "name": "fs_default",
            "kind": "other"
        }
    ]
}"#;

fn write_surfaces(dir: &Path) {
    fs::write(dir.join("integrate.json"), INTEGRATE_SURFACE).unwrap();
    fs::write(dir.join("fft.json"), CLEAN_SURFACE).unwrap();
    fs::write(dir.join("signal.json"), SIGNAL_SURFACE).unwrap();
}

fn npdoc() -> Command {
    let mut command = Command::cargo_bin(BIN_NAME).unwrap();
    command.env("NO_COLOR", "1");
    command
}

#[test]
fn check_reports_findings_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args(["check", "integrate", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(
            "\n\
             === integrate ===\n\
             integrate.trapezoid\n    \
             missing section: 'Returns'\n    \
             missing 'import numpy as np' in 'Examples'\n\
             integrate.simpson\n    \
             duplicated imports in Examples:\n        \
             >>> import numpy as np\n",
        );
}

#[test]
fn exit_zero_suppresses_the_failure_code() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args(["check", "integrate", "--exit-zero", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn clean_module_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args(["check", "fft", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("\n=== fft ===\n");
}

#[test]
fn ignore_missing_returns_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args(["check", "integrate", "-r", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(
            "\n\
             === integrate ===\n\
             integrate.trapezoid\n    \
             missing 'import numpy as np' in 'Examples'\n\
             integrate.simpson\n    \
             duplicated imports in Examples:\n        \
             >>> import numpy as np\n",
        );
}

#[test]
fn include_classes_checks_public_methods() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    let assert = npdoc()
        .args(["check", "integrate", "--include-classes", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("integrate.OdeSolver.step\n"));
    assert!(!stdout.contains("OdeSolver.t"));
    assert!(!stdout.contains("OdeSolver._advance"));
}

#[test]
fn skip_list_excludes_objects() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args([
            "check",
            "integrate",
            "--skip",
            "integrate.trapezoid",
            "--skip",
            "integrate.simpson",
            "--surface-dir",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("\n=== integrate ===\n");
}

#[test]
fn default_module_list_is_every_known_module_sorted() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    let assert = npdoc()
        .args(["check", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let fft = stdout.find("=== fft ===").unwrap();
    let integrate = stdout.find("=== integrate ===").unwrap();
    assert!(fft < integrate);
}

#[test]
fn unknown_module_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    let assert = npdoc()
        .args(["check", "ndimage", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .code(2);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("npdoc failed"));
    assert!(stderr.contains("ndimage"));
}

#[test]
fn missing_examples_lists_functions_sorted_with_marker() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args(["missing-examples", "signal", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(
            "signal (2)\n    \
             firwin\n    \
             medfilt \t[no docstring]\n\
             \n\
             Found 2 functions\n",
        );
}

#[test]
fn missing_examples_skips_deprecated_functions() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    let assert = npdoc()
        .args(["missing-examples", "signal", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("cmplx_sort"));
    assert!(!stdout.contains("lfilter"));
    assert!(!stdout.contains("ButterFilter"));
}

#[test]
fn missing_examples_clean_module_prints_only_the_total() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args(["missing-examples", "fft", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("\nFound 0 functions\n");
}

#[test]
fn missing_examples_honors_skip_and_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_surfaces(dir.path());

    npdoc()
        .args([
            "missing-examples",
            "signal",
            "--skip",
            "signal.firwin",
            "--skip",
            "signal.medfilt",
            "--surface-dir",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("\nFound 0 functions\n");

    npdoc()
        .args(["missing-examples", "signal", "--exit-zero", "--surface-dir"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn version() {
    npdoc()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("npdoc {}\n", env!("CARGO_PKG_VERSION")));
}
