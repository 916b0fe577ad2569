use std::path::Path;
use std::process::{Command, Output};
use time::OffsetDateTime;
use time::macros::format_description;

fn todo(store_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(args)
        .env("TODO_STORE_DIR", store_dir)
        .output()
        .expect("failed to run todo")
}

fn today() -> String {
    OffsetDateTime::now_utc()
        .date()
        .format(format_description!("[year]-[month]-[day]"))
        .expect("format today")
}

#[test]
fn report_on_empty_store() {
    let store_dir = tempfile::tempdir().unwrap();

    let output = todo(store_dir.path(), &["report"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        format!("{} Pending : 0 Completed : 0", today())
    );
}

#[test]
fn report_counts_pending_and_completed() {
    let store_dir = tempfile::tempdir().unwrap();
    for task in ["A", "B", "C"] {
        todo(store_dir.path(), &["add", task]);
    }
    todo(store_dir.path(), &["done", "3"]);
    todo(store_dir.path(), &["done", "1"]);

    let first = todo(store_dir.path(), &["report"]);
    let second = todo(store_dir.path(), &["report"]);

    assert_eq!(
        String::from_utf8_lossy(&first.stdout).trim_end(),
        format!("{} Pending : 1 Completed : 2", today())
    );
    assert_eq!(first.stdout, second.stdout);
}
