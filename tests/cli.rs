use assert_cmd::Command;

fn litepost() -> Command {
    Command::cargo_bin("litepost").unwrap()
}

#[test]
fn version_flag_prints_version() {
    let output = litepost().arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");
}

#[test]
fn help_lists_overrides() {
    let output = litepost().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--backend", "--config", "--timeout", "--url"] {
        assert!(stdout.contains(flag), "missing {flag} in: {stdout}");
    }
}

#[test]
fn bad_backend_fails_before_the_ui_starts() {
    let dir = tempfile::tempdir().unwrap();
    let output = litepost()
        .args(["--backend", "ftp://files.example.com"])
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be an http(s) base URL"), "stderr: {stderr}");
}

#[test]
fn bad_timeout_fails_before_the_ui_starts() {
    let dir = tempfile::tempdir().unwrap();
    let output = litepost()
        .args(["--timeout", "eventually"])
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid timeout"), "stderr: {stderr}");
}
