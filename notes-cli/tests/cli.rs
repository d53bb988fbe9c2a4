use assert_cmd::Command;
use predicates::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// A temp dir holding `config.toml` with `default` and `work` categories under `notes/`.
fn setup() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("notes");
    let config = format!(
        "[default]\npath = '{}'\nfilename = '%Y-%m-%d'\next = '.md'\n\n[work]\npath = '{}'\n",
        root.display(),
        root.join("work").display()
    );
    let config_path = tmp.path().join("config.toml");
    fs::write(&config_path, config).unwrap();
    (tmp, config_path)
}

fn notes(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("notes").unwrap();
    cmd.current_dir(dir)
        .env_remove("NOTES_CONFIG")
        .env_remove("NOTES_LOG");
    cmd
}

#[test]
fn creates_note_for_full_date() {
    let (tmp, config) = setup();

    notes(tmp.path())
        .args(["-C", config.to_str().unwrap(), "new", "-d", "2023-02-20"])
        .assert()
        .success()
        .stderr(predicate::str::contains("created"));

    let note = tmp.path().join("notes").join("2023-02-20.md");
    assert!(note.is_file());
    assert_eq!(fs::read_to_string(note).unwrap(), "");
}

#[test]
fn second_creation_is_refused() {
    let (tmp, config) = setup();
    let args = ["-C", config.to_str().unwrap(), "new", "-d", "2023-02-20"];

    notes(tmp.path()).args(args).assert().success();
    notes(tmp.path())
        .args(args)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("note already exist"));
}

#[test]
fn alias_category_sub_directory_and_split_date() {
    let (tmp, config) = setup();

    notes(tmp.path())
        .args(["--config", config.to_str().unwrap()])
        .args(["n", "-c", "work", "-D", "meetings", "-d", "2023", "02", "20"])
        .assert()
        .success();

    let note = tmp
        .path()
        .join("notes")
        .join("work")
        .join("meetings")
        .join("2023-02-20.md");
    assert!(note.is_file());
}

#[test]
fn no_date_uses_today() {
    let (tmp, config) = setup();

    notes(tmp.path())
        .args(["-C", config.to_str().unwrap(), "new"])
        .assert()
        .success();

    let created: Vec<_> = fs::read_dir(tmp.path().join("notes"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].extension().unwrap(), "md");
}

#[test]
fn config_path_from_environment() {
    let (tmp, config) = setup();

    notes(tmp.path())
        .env("NOTES_CONFIG", &config)
        .args(["new", "-d", "2023-02-20"])
        .assert()
        .success();

    assert!(tmp.path().join("notes").join("2023-02-20.md").is_file());
}

#[test]
fn config_in_working_directory_is_found() {
    let (tmp, _config) = setup();

    notes(tmp.path())
        .args(["new", "-d", "2023-02-20"])
        .assert()
        .success();

    assert!(tmp.path().join("notes").join("2023-02-20.md").is_file());
}

#[test]
fn unrecognized_date_fails() {
    let (tmp, config) = setup();

    notes(tmp.path())
        .args(["-C", config.to_str().unwrap(), "new", "-d", "13-40"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized date"));

    assert!(!tmp.path().join("notes").exists());
}

#[test]
fn unknown_category_fails() {
    let (tmp, config) = setup();

    notes(tmp.path())
        .args(["-C", config.to_str().unwrap(), "new", "-c", "recipes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("category not found"));
}

#[test]
fn missing_default_category_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "[work]\npath = 'notes'\n").unwrap();

    notes(tmp.path())
        .args(["-C", config.to_str().unwrap(), "new", "-c", "work"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("default category not found"));
}

#[test]
fn malformed_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "[default\n").unwrap();

    notes(tmp.path())
        .args(["-C", config.to_str().unwrap(), "new"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("decoding config"));
}

#[test]
fn silent_hides_config_details() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "[default\n").unwrap();

    notes(tmp.path())
        .args(["-s", "-C", config.to_str().unwrap(), "new"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("notes configuration unavailable"))
        .stderr(predicate::str::contains("decoding config").not());
}

#[test]
fn silent_does_not_hide_existing_note() {
    let (tmp, config) = setup();
    let args = ["--silent", "-C", config.to_str().unwrap(), "new", "-d", "1999-12-31"];

    notes(tmp.path()).args(args).assert().success();
    notes(tmp.path())
        .args(args)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("note already exist"));
}
