//! Integration tests for the `ormkit` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TEMPLATE_FOO: &str = "import {EventSubscriber, EntitySubscriberInterface} from \"typeorm\";\n\
                            \n\
                            @EventSubscriber()\n\
                            export class Foo implements EntitySubscriberInterface<any> {\n\
                            \n\
                            }\n";

/// `ormkit` running inside `dir`, isolated from the developer's settings.
fn ormkit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ormkit").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ORMKIT_SETTINGS");
    cmd
}

fn write_ormconfig(dir: &Path, file: &str, json: &str) {
    fs::write(dir.join(file), json).unwrap();
}

#[test]
fn test_help_lists_subscriber_flags() {
    let temp = TempDir::new().unwrap();
    ormkit(temp.path())
        .args(["subscriber:create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generates a new subscriber."))
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--connection"))
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    ormkit(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_explicit_dir_wins_over_config() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();
    fs::create_dir(temp.path().join("gen")).unwrap();
    write_ormconfig(
        temp.path(),
        "ormconfig.json",
        r#"[{"cli":{"subscribersDir":"gen"}}]"#,
    );

    ormkit(temp.path())
        .args(["subscriber:create", "--name", "Foo", "--dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscriber 'Foo' created"));

    let written = fs::read_to_string(temp.path().join("out/Foo.ts")).unwrap();
    assert_eq!(written, TEMPLATE_FOO);
    assert!(!temp.path().join("gen/Foo.ts").exists());
}

#[test]
fn test_explicit_dir_without_config_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo", "-d", "out"])
        .assert()
        .success();

    assert!(temp.path().join("out/Foo.ts").exists());
}

#[test]
fn test_dir_from_default_connection() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("gen")).unwrap();
    write_ormconfig(
        temp.path(),
        "ormconfig.json",
        r#"[{"cli":{"subscribersDir":"gen"}}]"#,
    );

    ormkit(temp.path())
        .args(["subscriber:create", "--name", "Bar"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join("gen/Bar.ts")).unwrap();
    assert!(written.contains("export class Bar implements EntitySubscriberInterface<any>"));
}

#[test]
fn test_dir_from_named_connection() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("gen")).unwrap();
    fs::create_dir(temp.path().join("reporting")).unwrap();
    write_ormconfig(
        temp.path(),
        "ormconfig.json",
        r#"[
            {"cli":{"subscribersDir":"gen"}},
            {"name":"reporting","cli":{"subscribersDir":"reporting"}}
        ]"#,
    );

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "AuditSubscriber", "-c", "reporting"])
        .assert()
        .success();

    assert!(temp.path().join("reporting/AuditSubscriber.ts").exists());
    assert!(!temp.path().join("gen/AuditSubscriber.ts").exists());
}

#[test]
fn test_unknown_connection_writes_to_cwd() {
    let temp = TempDir::new().unwrap();
    write_ormconfig(
        temp.path(),
        "ormconfig.json",
        r#"[{"name":"foo","cli":{"subscribersDir":"subsFoo"}}]"#,
    );

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo", "-c", "bar"])
        .assert()
        .success();

    assert!(temp.path().join("Foo.ts").exists());
}

#[test]
fn test_missing_config_writes_to_cwd() {
    let temp = TempDir::new().unwrap();

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("Foo.ts")).unwrap(),
        TEMPLATE_FOO
    );
}

#[test]
fn test_malformed_config_is_ignored() {
    let temp = TempDir::new().unwrap();
    write_ormconfig(temp.path(), "ormconfig.json", "module.exports = [];");

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo"])
        .assert()
        .success();

    assert!(temp.path().join("Foo.ts").exists());
}

#[test]
fn test_cf_alias_selects_config_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("custom")).unwrap();
    write_ormconfig(
        temp.path(),
        "orm.custom.json",
        r#"[{"cli":{"subscribersDir":"custom"}}]"#,
    );

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo", "--cf", "orm.custom.json"])
        .assert()
        .success();

    assert!(temp.path().join("custom/Foo.ts").exists());
}

#[test]
fn test_settings_file_supplies_default_connection() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("rep")).unwrap();
    write_ormconfig(
        temp.path(),
        "ormconfig.json",
        r#"[{"name":"reporting","cli":{"subscribersDir":"rep"}}]"#,
    );
    fs::write(
        temp.path().join(".ormkit.toml"),
        "[defaults]\nconnection = \"reporting\"\n",
    )
    .unwrap();

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo"])
        .assert()
        .success();

    assert!(temp.path().join("rep/Foo.ts").exists());
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();

    ormkit(temp.path())
        .args(["--output-format", "json", "subscriber:create", "-n", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Foo""#))
        .stdout(predicate::str::contains("Foo.ts"));
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();

    ormkit(temp.path())
        .args(["-q", "subscriber:create", "-n", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("Foo.ts").exists());
}

#[test]
fn test_existing_file_is_overwritten() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Foo.ts"), "stale contents").unwrap();

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("Foo.ts")).unwrap(),
        TEMPLATE_FOO
    );
}

#[test]
fn test_no_color_env_values_do_not_break_parsing() {
    for value in ["1", "", "true", "0"] {
        let temp = TempDir::new().unwrap();

        ormkit(temp.path())
            .env("NO_COLOR", value)
            .args(["subscriber:create", "-n", "Foo"])
            .assert()
            .success();

        assert!(
            temp.path().join("Foo.ts").exists(),
            "NO_COLOR={value:?} should still scaffold"
        );
    }
}

#[test]
fn test_empty_dir_falls_back_to_config() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("gen")).unwrap();
    write_ormconfig(
        temp.path(),
        "ormconfig.json",
        r#"[{"cli":{"subscribersDir":"gen"}}]"#,
    );

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Bar", "-d", ""])
        .assert()
        .success();

    assert!(temp.path().join("gen/Bar.ts").exists());
    assert!(!temp.path().join("Bar.ts").exists());
}

#[test]
fn test_legacy_cf_flag() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("custom")).unwrap();
    write_ormconfig(
        temp.path(),
        "orm.custom.json",
        r#"[{"cli":{"subscribersDir":"custom"}}]"#,
    );

    ormkit(temp.path())
        .args(["subscriber:create", "-n", "Foo", "-cf", "orm.custom.json"])
        .assert()
        .success();

    assert!(temp.path().join("custom/Foo.ts").exists());
}
