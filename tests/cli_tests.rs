use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn passdeck(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("passdeck").unwrap();
    cmd.env("PASSDECK_CONFIG_DIR", root.join("cfg"))
        .env_remove("PASSDECK_STORAGE_PATH")
        .env_remove("PASSDECK_STORAGE_KEY")
        .env_remove("PASSDECK_QUOTA_BYTES")
        .env_remove("PASSDECK_TOAST_MS")
        .arg("--path")
        .arg(root.join("storage.json"));
    cmd
}

fn add(root: &Path, website: &str, username: &str, password: &str) {
    passdeck(root)
        .args(["add", "--website", website, "--username", username, "--password", password])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password Saved"));
}

#[test]
fn empty_list_says_no_data() {
    let td = tempdir().unwrap();
    passdeck(td.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Data to Show"));
}

#[test]
fn add_list_masks_and_reveal_shows() {
    let td = tempdir().unwrap();
    add(td.path(), "a.com", "u1", "pw1");
    add(td.path(), "b.com", "u2", "pw22");

    passdeck(td.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.com").and(predicate::str::contains("b.com")))
        .stdout(predicate::str::contains("pw1").not())
        .stdout(predicate::str::contains("****"));

    passdeck(td.path())
        .args(["list", "--reveal", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pw22"))
        .stdout(predicate::str::contains("pw1").not());
}

#[test]
fn list_json_keeps_order() {
    let td = tempdir().unwrap();
    add(td.path(), "a.com", "u1", "pw1");
    add(td.path(), "b.com", "u2", "pw22");

    let assert = passdeck(td.path()).args(["list", "--json"]).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["website"], "a.com");
    assert_eq!(arr[1]["website"], "b.com");
    assert_eq!(arr[1]["password"], "****");
}

#[test]
fn rm_by_position() {
    let td = tempdir().unwrap();
    add(td.path(), "a.com", "u1", "pw1");
    add(td.path(), "b.com", "u2", "pw22");

    passdeck(td.path())
        .args(["rm", "0", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password entry deleted"));

    passdeck(td.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("b.com").and(predicate::str::contains("a.com").not()));
}

#[test]
fn rm_out_of_range_fails_and_keeps_data() {
    let td = tempdir().unwrap();
    add(td.path(), "a.com", "u1", "pw1");

    passdeck(td.path())
        .args(["rm", "5", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry at position 5"));

    passdeck(td.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.com"));
}

#[test]
fn copy_echo_prints_real_password() {
    let td = tempdir().unwrap();
    add(td.path(), "a.com", "u1", "pw1");

    passdeck(td.path())
        .args(["copy", "password", "0", "--no-copy", "--echo"])
        .assert()
        .success()
        .stdout("pw1\n");
}

#[test]
fn copy_without_clipboard_reports_but_succeeds() {
    let td = tempdir().unwrap();
    add(td.path(), "a.com", "u1", "pw1");

    passdeck(td.path())
        .env("SSH_CONNECTION", "1")
        .args(["copy", "username", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Detected SSH session"));
}

#[test]
fn html_outputs_table_markup() {
    let td = tempdir().unwrap();
    add(td.path(), "a.com", "u1", "pw1");

    passdeck(td.path())
        .arg("html")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<tr><th>Website</th>"))
        .stdout(predicate::str::contains(r#"data-realpassword="pw1""#));
}

#[test]
fn quota_from_env_surfaces_storage_error() {
    let td = tempdir().unwrap();
    passdeck(td.path())
        .env("PASSDECK_QUOTA_BYTES", "10")
        .args(["add", "--website", "a.com", "--username", "u1", "--password", "pw1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("storage quota exceeded"));
}

#[test]
fn contact_prints_confirmation() {
    let td = tempdir().unwrap();
    passdeck(td.path())
        .args([
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you, Ada! Your message has been sent."))
        .stdout(predicate::str::contains("We'll respond to ada@example.com soon."));
}
