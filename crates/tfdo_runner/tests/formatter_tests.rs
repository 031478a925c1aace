//! Integration tests for formatter lookup and execution.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use tfdo_runner::{
    locate_executable, FormatOutcome, Formatter, MockBehavior, MockFormatter, PathFormatter,
    RunnerError,
};

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

#[test]
fn test_missing_formatter_is_not_fatal() {
    let bin_dir = tempdir().unwrap();
    let work_dir = tempdir().unwrap();
    fs::write(work_dir.path().join("variables.tf"), "variable \"a\" {}\n").unwrap();

    let formatter = PathFormatter::new("tffmt").with_search_path(bin_dir.path().as_os_str());
    let outcome = formatter.format(work_dir.path());

    assert_eq!(
        outcome,
        FormatOutcome::NotFound {
            program: "tffmt".to_string()
        }
    );
    assert_eq!(
        fs::read_to_string(work_dir.path().join("variables.tf")).unwrap(),
        "variable \"a\" {}\n"
    );
}

#[test]
fn test_locate_reports_not_found_error() {
    let bin_dir = tempdir().unwrap();
    let formatter = PathFormatter::new("tffmt").with_search_path(bin_dir.path().as_os_str());

    match formatter.locate() {
        Err(RunnerError::NotFound(name)) => assert_eq!(name, "tffmt"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_workdir_is_reported_as_failure() {
    let work_dir = tempdir().unwrap();
    let gone = work_dir.path().join("does-not-exist");

    let outcome = PathFormatter::new("tffmt").format(&gone);

    assert!(matches!(outcome, FormatOutcome::Failed { .. }));
}

#[cfg(unix)]
#[test]
fn test_formatter_execution() {
    // Scripts are spawned from a single test to keep file descriptors of
    // freshly written executables out of concurrent forks.
    let bin_dir = tempdir().unwrap();
    let other_dir = tempdir().unwrap();
    let work_dir = tempdir().unwrap();

    write_script(bin_dir.path(), "goodfmt", "touch formatted.marker");
    write_script(bin_dir.path(), "badfmt", "echo broken >&2\nexit 3");
    fs::write(bin_dir.path().join("notexec"), "#!/bin/sh\n").unwrap();

    let mut search = OsString::new();
    search.push(other_dir.path().as_os_str());
    search.push(":");
    search.push(bin_dir.path().as_os_str());

    assert_eq!(
        locate_executable("goodfmt", Some(search.as_os_str())),
        Some(bin_dir.path().join("goodfmt"))
    );
    assert_eq!(locate_executable("notexec", Some(search.as_os_str())), None);

    let good = PathFormatter::new("goodfmt").with_search_path(search.clone());
    let outcome = good.format(work_dir.path());
    assert_eq!(
        outcome,
        FormatOutcome::Formatted {
            program: "goodfmt".to_string()
        }
    );
    assert!(work_dir.path().join("formatted.marker").exists());

    let bad = PathFormatter::new("badfmt").with_search_path(search.clone());
    match bad.format(work_dir.path()) {
        FormatOutcome::Failed { program, reason } => {
            assert_eq!(program, "badfmt");
            assert!(reason.contains("broken"));
        }
        other => panic!("expected failure, got {:?}", other),
    }

    let direct = bin_dir.path().join("goodfmt");
    let by_path = PathFormatter::new(direct.to_string_lossy().to_string())
        .with_search_path(OsString::new());
    assert!(by_path.format(work_dir.path()).is_formatted());
}

#[test]
fn test_mock_formatter_records_calls() {
    let work_dir = tempdir().unwrap();
    let mock = MockFormatter::new();

    assert!(mock.format(work_dir.path()).is_formatted());
    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.calls(), vec![work_dir.path().to_path_buf()]);
}

#[test]
fn test_mock_formatter_behaviors() {
    let dir = Path::new(".");

    assert!(matches!(
        MockFormatter::missing().format(dir),
        FormatOutcome::NotFound { .. }
    ));
    assert!(matches!(
        MockFormatter::failing().format(dir),
        FormatOutcome::Failed { .. }
    ));
    assert!(MockFormatter::new()
        .with_behavior(MockBehavior::Succeed)
        .format(dir)
        .is_formatted());
}
