use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn file_logging_writes_debug_events() {
    let tmp = tempdir().unwrap();
    let log = tmp.path().join("flatmatter.log");
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[logging]\nlevel = \"off\"\nfile_level = \"debug\"\nfile = \"{}\"\n",
            log.display()
        ),
    )
    .unwrap();
    let doc = tmp.path().join("doc.md");
    fs::write(&doc, "a: 1\nbroken").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flatmatter"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()).env_remove("RUST_LOG");
    cmd.args(["--config", cfg.to_str().unwrap(), "parse", doc.to_str().unwrap()])
        .assert()
        .success()
        .stderr("");

    let written = fs::read_to_string(&log).unwrap();
    assert!(written.contains("dropping line without a value separator"), "log was: {written}");
}

#[test]
fn config_in_xdg_dir_is_picked_up() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("flatmatter");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "version = 1\n[output]\nformat = \"yaml\"\n").unwrap();
    let doc = tmp.path().join("doc.md");
    fs::write(&doc, "a: 1").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flatmatter"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["parse", doc.to_str().unwrap()]).assert().success().stdout("a: 1\n");
}

#[test]
fn piped_stderr_logs_have_no_color_codes() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 1\n[logging]\nlevel = \"debug\"\n").unwrap();
    let doc = tmp.path().join("doc.md");
    fs::write(&doc, "a: 1\nbroken").unwrap();

    let output = Command::new(assert_cmd::cargo::cargo_bin!("flatmatter"))
        .env("XDG_CONFIG_HOME", tmp.path())
        .env_remove("RUST_LOG")
        .args(["--config", cfg.to_str().unwrap(), "parse", doc.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("dropping line without a value separator"), "stderr was: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr was: {stderr}");
}
