//! CLI integration tests
//!
//! Each test runs the built `botcmd` binary against a fresh database in a
//! temp directory. `--config` points at a missing file so defaults apply
//! unless a test writes its own.

use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("commands.db")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("botcmd.toml")
    }

    fn run(&self, args: &[&str]) -> Output {
        let cli_bin = env!("CARGO_BIN_EXE_botcmd");
        let db = self.db_path();
        let config = self.config_path();

        Command::new(cli_bin)
            .current_dir(self.dir.path())
            .env("RUST_LOG", "off")
            .args(["--config", config.to_str().unwrap()])
            .args(["--db", db.to_str().unwrap()])
            .args(args)
            .output()
            .expect("Failed to execute CLI")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "botcmd {:?} should succeed. Stderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn run_err(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "botcmd {:?} should fail. Stdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}

fn stored_lines(db_path: &Path, name: &str) -> Vec<String> {
    let conn = Connection::open(db_path).unwrap();
    let mut stmt = conn
        .prepare(
            "SELECT r.text FROM responses r JOIN commands c ON c.id = r.command_id
             WHERE c.name = ?1 ORDER BY r.position",
        )
        .unwrap();
    let rows = stmt
        .query_map([name], |row| row.get::<_, String>(0))
        .unwrap();
    rows.map(|r| r.unwrap()).collect()
}

#[test]
fn test_add_save_show_round_trip() {
    let ws = Workspace::new();

    let stdout = ws.run_ok(&["add", "!greet"]);
    assert!(stdout.contains("'!greet' added"));

    let stdout = ws.run_ok(&["save", "!greet", "Hi there", "", "  Welcome! "]);
    assert!(stdout.contains("2 responses"));

    let stdout = ws.run_ok(&["show", "!greet"]);
    assert_eq!(stdout, "Hi there\nWelcome!\n");

    let stdout = ws.run_ok(&["show", "!greet", "--numbered"]);
    assert_eq!(stdout, "0: Hi there\n1: Welcome!\n");

    assert_eq!(stored_lines(&ws.db_path(), "!greet"), ["Hi there", "Welcome!"]);
}

#[test]
fn test_add_with_initial_lines() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "!rules", "1. Be kind", "2. No spam"]);

    assert_eq!(ws.run_ok(&["show", "!rules"]), "1. Be kind\n2. No spam\n");
}

#[test]
fn test_add_duplicate_fails_with_code() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "hello"]);

    let stderr = ws.run_err(&["add", "  hello "]);
    assert!(stderr.contains("ERR_ALREADY_EXISTS"), "stderr: {}", stderr);
    assert!(stderr.contains("request_id"), "stderr: {}", stderr);
}

#[test]
fn test_names_are_case_sensitive() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "hello"]);
    ws.run_ok(&["add", "Hello"]);

    let stdout = ws.run_ok(&["list"]);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_blank_name_rejected() {
    let ws = Workspace::new();
    let stderr = ws.run_err(&["add", "   "]);
    assert!(stderr.contains("ERR_INVALID_NAME"), "stderr: {}", stderr);
}

#[test]
fn test_blank_save_rejected_by_default_keeps_prior() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "!greet", "hi"]);

    let stderr = ws.run_err(&["save", "!greet", "", "   "]);
    assert!(stderr.contains("ERR_EMPTY_RESULT"), "stderr: {}", stderr);

    assert_eq!(ws.run_ok(&["show", "!greet"]), "hi\n");
}

#[test]
fn test_blank_save_deletes_under_delete_policy() {
    let ws = Workspace::new();
    fs::write(ws.config_path(), "empty_save_policy = \"delete\"\n").unwrap();
    ws.run_ok(&["add", "!greet", "hi"]);

    let stdout = ws.run_ok(&["save", "!greet", "  "]);
    assert!(stdout.contains("was deleted"));

    let stderr = ws.run_err(&["show", "!greet"]);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr: {}", stderr);
}

#[test]
fn test_save_from_file() {
    let ws = Workspace::new();
    let lines_path = ws.dir.path().join("lines.txt");
    fs::write(&lines_path, "three\n\none\n").unwrap();
    ws.run_ok(&["add", "faq", "one", "two", "three"]);

    ws.run_ok(&["save", "faq", "--from-file", lines_path.to_str().unwrap()]);

    assert_eq!(stored_lines(&ws.db_path(), "faq"), ["three", "one"]);
}

#[test]
fn test_save_missing_command_fails() {
    let ws = Workspace::new();
    let stderr = ws.run_err(&["save", "ghost", "boo"]);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr: {}", stderr);

    let stdout = ws.run_ok(&["list"]);
    assert!(stdout.is_empty());
}

#[test]
fn test_delete_twice() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "bye"]);

    ws.run_ok(&["delete", "bye"]);
    let stderr = ws.run_err(&["delete", "bye"]);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr: {}", stderr);
}

#[test]
fn test_list_preserves_insertion_order_and_filters() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "!zeta", "last letter"]);
    ws.run_ok(&["add", "!alpha"]);
    ws.run_ok(&["add", "!Zoo", "animals"]);

    let stdout = ws.run_ok(&["list"]);
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        rows,
        [
            "!zeta\t1\tlast letter",
            "!alpha\t0\t(no responses)",
            "!Zoo\t1\tanimals"
        ]
    );

    let stdout = ws.run_ok(&["list", "--filter", "z"]);
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split('\t').next())
        .collect();
    assert_eq!(names, ["!zeta", "!Zoo"]);
}

#[test]
fn test_preview_does_not_touch_store() {
    let ws = Workspace::new();

    let stdout = ws.run_ok(&["preview", " a ", "", "b"]);
    assert_eq!(stdout, "a\nb\n");

    let stdout = ws.run_ok(&["preview", "", "   "]);
    assert_eq!(stdout, "(no responses)\n");

    assert!(!ws.db_path().exists());
}

#[test]
fn test_import_then_export() {
    let ws = Workspace::new();
    let legacy_path = ws.dir.path().join("commands.json");
    fs::write(
        &legacy_path,
        r#"{
    "!hello": [{"responseLine1": "Hi there"}, {"responseLine1": "  "}, {"responseLine1": "Welcome!"}],
    "!cat": "https://i.groupme.com/cat.jpeg"
}"#,
    )
    .unwrap();

    let stdout = ws.run_ok(&["import", legacy_path.to_str().unwrap()]);
    assert!(stdout.contains("2 added, 0 replaced"), "stdout: {}", stdout);
    assert_eq!(ws.run_ok(&["show", "!hello"]), "Hi there\nWelcome!\n");

    let export_path = ws.dir.path().join("out").join("commands.json");
    let stdout = ws.run_ok(&["export", export_path.to_str().unwrap()]);
    assert!(stdout.contains("Exported 2 commands"));

    let exported = fs::read_to_string(&export_path).unwrap();
    let hello = exported.find("\"!hello\"").unwrap();
    let cat = exported.find("\"!cat\"").unwrap();
    assert!(hello < cat, "export should keep insertion order");
    assert!(exported.contains("\"responseLine1\": \"Welcome!\""));
}

#[test]
fn test_import_malformed_document_fails() {
    let ws = Workspace::new();
    let legacy_path = ws.dir.path().join("commands.json");
    fs::write(&legacy_path, "[1, 2, 3]").unwrap();

    let stderr = ws.run_err(&["import", legacy_path.to_str().unwrap()]);
    assert!(stderr.contains("ERR_INVALID_INPUT"), "stderr: {}", stderr);
}

#[test]
fn test_bad_config_is_reported() {
    let ws = Workspace::new();
    fs::write(ws.config_path(), "empty_save_policy = \"sometimes\"\n").unwrap();

    let stderr = ws.run_err(&["list"]);
    assert!(stderr.contains("ERR_INVALID_INPUT"), "stderr: {}", stderr);
}

#[test]
fn test_external_request_id_reported_on_error() {
    let ws = Workspace::new();
    let output = Command::new(env!("CARGO_BIN_EXE_botcmd"))
        .current_dir(ws.dir.path())
        .env("RUST_LOG", "off")
        .env("BOTCMD_REQUEST_ID", "chat-msg-1234")
        .args(["--config", ws.config_path().to_str().unwrap()])
        .args(["--db", ws.db_path().to_str().unwrap()])
        .args(["show", "!missing"])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("(request_id: chat-msg-1234)"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_show_times() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "!greet", "hi"]);

    let stdout = ws.run_ok(&["show", "!greet", "--times"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "hi");
    assert!(lines[1].starts_with("created: "), "stdout: {}", stdout);
    assert!(lines[2].starts_with("updated: "), "stdout: {}", stdout);
}

#[test]
fn test_import_blank_entry_over_populated_command_fails() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "!rules", "be nice"]);
    let legacy_path = ws.dir.path().join("commands.json");
    fs::write(&legacy_path, r#"{"!rules": [{"responseLine1": "   "}]}"#).unwrap();

    let stderr = ws.run_err(&["import", legacy_path.to_str().unwrap()]);
    assert!(stderr.contains("ERR_EMPTY_RESULT"), "stderr: {}", stderr);

    assert_eq!(ws.run_ok(&["show", "!rules"]), "be nice\n");
}
