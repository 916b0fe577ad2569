use std::process::Command;

#[test]
fn cli_smoke_without_arguments_prints_usage() {
    let exe = env!("CARGO_BIN_EXE_todo");
    let store_dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .env("TODO_STORE_DIR", store_dir.path())
        .output()
        .expect("failed to run todo");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage :-"));
    assert!(stdout.contains("$ ./todo report           # Statistics"));
}

#[test]
fn cli_smoke_help_matches_no_arguments() {
    let exe = env!("CARGO_BIN_EXE_todo");
    let store_dir = tempfile::tempdir().unwrap();
    let bare = Command::new(exe)
        .env("TODO_STORE_DIR", store_dir.path())
        .output()
        .expect("failed to run todo");
    let help = Command::new(exe)
        .arg("help")
        .env("TODO_STORE_DIR", store_dir.path())
        .output()
        .expect("failed to run todo help");

    assert!(help.status.success());
    assert_eq!(bare.stdout, help.stdout);
    assert!(!store_dir.path().join("todo.txt").exists());
}

#[test]
fn cli_smoke_version() {
    let exe = env!("CARGO_BIN_EXE_todo");
    let output = Command::new(exe)
        .arg("--version")
        .output()
        .expect("failed to run todo --version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_smoke_unknown_command_reports_error_and_exits_normally() {
    let exe = env!("CARGO_BIN_EXE_todo");
    let store_dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .arg("purge")
        .env("TODO_STORE_DIR", store_dir.path())
        .output()
        .expect("failed to run todo purge");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: "));
    assert!(stdout.contains("Usage :-"));
}
