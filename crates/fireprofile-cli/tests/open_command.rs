use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

#[allow(deprecated)]
fn get_fireprofile_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("fireprofile")
}

fn fireprofile(config: &Path) -> Command {
    let mut cmd = Command::new(get_fireprofile_bin());
    cmd.env("FIREPROFILE_CONFIG", config);
    cmd
}

fn write_config(path: &Path, domains: &str) {
    std::fs::write(
        path,
        format!(
            r#"{{
  "profiles": [
    {{"name": "work", "command": "firefox -P work"}},
    {{"name": "personal", "command": "firefox -P personal"}}
  ],
  "domains": {}
}}"#,
            domains
        ),
    )
    .unwrap();
}

fn domains(path: &Path) -> serde_json::Value {
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    json["domains"].clone()
}

#[test]
fn test_open_exact_rule() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, r#"{"mail.example.com": "personal", "example.com": "work"}"#);

    fireprofile(&config)
        .args(["open", "https://mail.example.com/inbox", "--dry-run"])
        .assert()
        .success()
        .stdout("firefox -P personal https://mail.example.com/inbox\n");
}

#[test]
fn test_open_parent_rule() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, r#"{"example.com": "work"}"#);

    fireprofile(&config)
        .args(["open", "https://docs.example.com/a?b=c", "--dry-run"])
        .assert()
        .success()
        .stdout("firefox -P work https://docs.example.com/a?b=c\n");
}

#[test]
fn test_open_miss_with_profile_remembers_parent_domain() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, "{}");

    fireprofile(&config)
        .args(["open", "https://a.b.news.org/", "--profile", "personal", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox -P personal https://a.b.news.org/"));

    assert_eq!(domains(&config), serde_json::json!({"news.org": "personal"}));
}

#[test]
fn test_open_miss_no_remember() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, "{}");

    fireprofile(&config)
        .args([
            "open",
            "https://news.org/",
            "--profile",
            "work",
            "--no-remember",
            "--dry-run",
        ])
        .assert()
        .success();

    assert_eq!(domains(&config), serde_json::json!({}));
}

#[test]
fn test_open_miss_single_label_host_is_not_remembered() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, "{}");

    fireprofile(&config)
        .args(["open", "http://localhost:8080/", "--profile", "work", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox -P work http://localhost:8080/"));

    assert_eq!(domains(&config), serde_json::json!({}));
}

#[test]
fn test_open_miss_prompts_for_profile() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, "{}");

    // Pick the second profile, accept the default "remember"
    fireprofile(&config)
        .args(["open", "https://shop.example.net/", "--dry-run"])
        .write_stdin("2\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select a profile"))
        .stdout(predicate::str::contains("firefox -P personal https://shop.example.net/"));

    assert_eq!(
        domains(&config),
        serde_json::json!({"example.net": "personal"})
    );
}

#[test]
fn test_open_prompt_cancel_launches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, "{}");

    fireprofile(&config)
        .args(["open", "https://shop.example.net/", "--dry-run"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"))
        .stdout(predicate::str::contains("https://shop.example.net/").not());
}

#[test]
fn test_open_dangling_rule_falls_back_to_choice() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, r#"{"example.com": "ghost"}"#);

    fireprofile(&config)
        .args(["open", "https://example.com/", "--profile", "work", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firefox -P work https://example.com/"));

    assert_eq!(domains(&config), serde_json::json!({"example.com": "work"}));
}

#[test]
fn test_open_without_profiles_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");

    fireprofile(&config)
        .args(["open", "https://example.com/", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_open_unknown_profile_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, "{}");

    fireprofile(&config)
        .args(["open", "https://example.com/", "--profile", "ghost", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'ghost' not found"));

    assert_eq!(domains(&config), serde_json::json!({}));
}

#[test]
fn test_open_url_without_host_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    write_config(&config, "{}");

    fireprofile(&config)
        .args(["open", "mailto:someone@example.com", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn test_open_corrupt_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    std::fs::write(&config, "{ not json").unwrap();

    fireprofile(&config)
        .args(["open", "https://example.com/", "--profile", "work", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));

    assert_eq!(std::fs::read_to_string(&config).unwrap(), "{ not json");
}

#[cfg(unix)]
#[test]
fn test_bare_url_launches_profile_command() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fireprofile.json");
    std::fs::write(
        &config,
        r#"{
  "profiles": [{"name": "noop", "command": "true"}],
  "domains": {"example.com": "noop"}
}"#,
    )
    .unwrap();

    fireprofile(&config)
        .arg("https://www.example.com/")
        .assert()
        .success();
}
