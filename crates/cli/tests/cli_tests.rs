//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("telegraph");
    cmd.env_remove("TELEGRAPH_ACCESS_TOKEN").env_remove("TELEGRAPH_API_URL");
    cmd
}

#[test]
fn test_cli_convert_stdin() {
    cmd()
        .arg("convert")
        .write_stdin("<b>hi</b>")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"[{"tag":"b","children":["hi"]}]"#));
}

#[test]
fn test_cli_convert_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("page.html");
    std::fs::write(&input, r#"<p>Hello <a href="https://example.com">world</a><!-- note --></p>"#).unwrap();

    let output = cmd().arg("convert").arg(&input).assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(
        value,
        serde_json::json!([{
            "tag": "p",
            "children": ["Hello ", { "tag": "a", "attrs": { "href": "https://example.com" }, "children": ["world"] }]
        }])
    );
}

#[test]
fn test_cli_convert_pretty() {
    cmd()
        .args(["convert", "--pretty"])
        .write_stdin("<p>x</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"p\""));
}

#[test]
fn test_cli_convert_empty_input() {
    cmd()
        .arg("convert")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_cli_convert_invalid_utf8() {
    cmd()
        .arg("convert")
        .write_stdin(vec![b'<', b'p', b'>', 0xff, 0xfe])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse HTML"));
}

#[test]
fn test_cli_convert_missing_file() {
    cmd()
        .args(["convert", "/nonexistent/file.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_missing_token() {
    let temp_dir = TempDir::new().unwrap();
    let token_file = temp_dir.path().join("access_token");

    cmd()
        .args(["account", "info", "--token-file"])
        .arg(&token_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no access token"));
}

#[test]
fn test_cli_empty_token_file() {
    let temp_dir = TempDir::new().unwrap();
    let token_file = temp_dir.path().join("access_token");
    std::fs::write(&token_file, "\n").unwrap();

    cmd()
        .args(["page", "list", "--token-file"])
        .arg(&token_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read saved access token"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", "convert"])
        .write_stdin("<p>x</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_invalid_base_url() {
    cmd()
        .args(["--base-url", "ftp://api.telegra.ph", "views", "Sample-Page-12-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported URL scheme"));
}

#[test]
fn test_cli_views_month_requires_year() {
    cmd()
        .args(["views", "Sample-Page-12-15", "--month", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--year"));
}

#[test]
fn test_cli_list_limit_out_of_range() {
    cmd()
        .args(["page", "list", "--limit", "500"])
        .assert()
        .failure();
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("account"))
        .stdout(predicate::str::contains("views"));
}

#[test]
fn test_cli_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("telegraph"));
}
