//! End-to-end tests for the `mcode` binary: every exit-code branch and
//! the byte-stable report format.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

fn mcode() -> Command {
    Command::cargo_bin("mcode").unwrap()
}

/// Repository root, for runs against the shipped default schema.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// The schema from the two documented scenarios: an object requiring "name".
fn name_schema(dir: &Path) -> PathBuf {
    write_json(
        dir,
        "name.schema.json",
        &json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["name"]
        }),
    )
}

#[test]
fn test_no_arguments_prints_usage_and_exits_zero() {
    mcode()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: mcode <data.json>"));
}

#[test]
fn test_missing_file_exits_one() {
    mcode()
        .arg("nope.json")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("❌ File not found: nope.json"));
}

#[test]
fn test_valid_document_prints_success_marker() {
    let dir = tempfile::tempdir().unwrap();
    let schema = name_schema(dir.path());
    let data = write_json(dir.path(), "data.json", &json!({"name": "x"}));

    mcode()
        .arg(&data)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .success()
        .stdout("✅ Schema validation passed\n");
}

#[test]
fn test_violations_are_warnings_not_failures() {
    let dir = tempfile::tempdir().unwrap();
    let schema = name_schema(dir.path());
    let data = write_json(dir.path(), "data.json", &json!({}));

    mcode()
        .arg(&data)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("⚠️ Schema validation warnings:")
                .and(predicate::str::contains("- : "))
                .and(predicate::str::contains("is a required property")),
        );
}

#[test]
fn test_warning_lines_sorted_by_path() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_json(
        dir.path(),
        "list.schema.json",
        &json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "properties": {
                "alpha": {"type": "integer"},
                "items": {"type": "array", "items": {"type": "string"}}
            }
        }),
    );
    let mut items = vec![json!("ok"); 11];
    items[2] = json!(2);
    items[10] = json!(10);
    let data = write_json(
        dir.path(),
        "data.json",
        &json!({"alpha": "not-an-integer", "items": items}),
    );

    let output = mcode()
        .arg(&data)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let alpha = stdout.find("- alpha:").expect("alpha warning missing");
    let two = stdout.find("- items.2:").expect("items.2 warning missing");
    let ten = stdout.find("- items.10:").expect("items.10 warning missing");
    assert!(alpha < two, "path order violated:\n{stdout}");
    assert!(two < ten, "numeric index order violated:\n{stdout}");
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let schema = name_schema(dir.path());
    let data = write_json(dir.path(), "data.json", &json!({"other": 1}));

    let run = |schema: &Path, data: &Path| {
        mcode()
            .arg(data)
            .arg("--schema")
            .arg(schema)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(&schema, &data), run(&schema, &data));
}

#[test]
fn test_malformed_data_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let schema = name_schema(dir.path());
    let data = dir.path().join("broken.json");
    fs::write(&data, "{ not json").unwrap();

    mcode()
        .arg(&data)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .failure()
        .code(2)
        .stdout(
            predicate::str::contains("❌")
                .and(predicate::str::contains("invalid JSON")),
        );
}

#[test]
fn test_malformed_schema_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("broken.schema.json");
    fs::write(&schema, "][").unwrap();
    let data = write_json(dir.path(), "data.json", &json!({}));

    mcode()
        .arg(&data)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("❌"));
}

#[test]
fn test_default_schema_validates_municipal_code() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_json(
        dir.path(),
        "code.json",
        &json!({
            "code_id": "springfield.municipal-code",
            "jurisdiction": "City of Springfield",
            "version": "1.1",
            "effective_date": "2024-01-01",
            "sections": [
                {"number": "1", "title": "General Provisions", "text": "Scope."}
            ]
        }),
    );

    mcode()
        .arg(&data)
        .current_dir(repo_root())
        .assert()
        .success()
        .stdout("✅ Schema validation passed\n");
}
