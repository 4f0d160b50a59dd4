//! End-to-end Get/Set/Delete against files on disk

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use tomlkv_core::{Error, KeyValue, delete, get, set};
use toml_edit::DocumentMut;

fn setup(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

fn read_doc(path: &Path) -> DocumentMut {
    fs::read_to_string(path).unwrap().parse().unwrap()
}

#[test]
fn test_literal_scenario() {
    let (_temp, path) = setup("[a]\nb = 1\n");

    let state = get(&path, "a.b").unwrap();
    assert_eq!(state, KeyValue::new(&path, "a.b").with_value(json!(1)));

    set(&path, "a.c.d", Some(&json!("x"))).unwrap();
    let doc = read_doc(&path);
    assert_eq!(doc["a"]["b"].as_integer(), Some(1));
    assert!(doc["a"]["c"].is_table_like());
    assert_eq!(doc["a"]["c"]["d"].as_str(), Some("x"));

    delete(&path, "a.b").unwrap();
    let doc = read_doc(&path);
    assert!(doc["a"].is_table_like());
    assert!(doc["a"].get("b").is_none());
    assert_eq!(doc["a"]["c"]["d"].as_str(), Some("x"));

    set(&path, "a.b", None).unwrap();
    assert_eq!(get(&path, "a.b").unwrap().value, Some(json!("")));
}

#[test]
fn test_auto_vivification() {
    let (_temp, path) = setup("title = \"demo\"\n");

    set(&path, "a.b.c", Some(&json!(1))).unwrap();

    let doc = read_doc(&path);
    assert!(doc["a"].is_table_like());
    assert!(doc["a"]["b"].is_table_like());
    assert_eq!(doc["a"]["b"]["c"].as_integer(), Some(1));
    assert_eq!(doc["title"].as_str(), Some("demo"));
}

#[test]
fn test_type_mismatch_leaves_file_unchanged() {
    let original = "a = \"scalar\"\n";
    let (_temp, path) = setup(original);

    let err = set(&path, "a.b", Some(&json!(1))).unwrap_err();

    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_type_mismatch_on_array() {
    let original = "a = [1, 2]\n";
    let (_temp, path) = setup(original);

    let err = set(&path, "a.b.c", Some(&json!(true))).unwrap_err();

    assert_eq!(err.exit_code().code(), 6);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_set_on_invalid_toml_leaves_file_unchanged() {
    let original = "[unterminated\nkey = 1\n";
    let (_temp, path) = setup(original);

    let err = set(&path, "key", Some(&json!(2))).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_set_is_idempotent() {
    let (_temp, path) = setup("[server]\nhost = \"localhost\"\n");
    let value = json!({"enabled": true, "ports": [80, 443]});

    set(&path, "server.tls.options", Some(&value)).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    set(&path, "server.tls.options", Some(&value)).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_delete_missing_key_leaves_file_unchanged() {
    let original = "# comment\n[a]\nb = 1\n";
    let (_temp, path) = setup(original);

    delete(&path, "missing.key").unwrap();
    delete(&path, "a.missing").unwrap();
    delete(&path, "a.b.c").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_delete_missing_file_is_noop() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    delete(&path, "a").unwrap();

    assert!(!path.exists());
}

#[test]
fn test_delete_keeps_empty_parent_table() {
    let (_temp, path) = setup("[a]\nb = 1\n");

    delete(&path, "a.b").unwrap();

    let doc = read_doc(&path);
    assert!(doc["a"].is_table_like());
    assert!(doc["a"].as_table_like().unwrap().is_empty());
}

#[test]
fn test_delete_whole_table() {
    let (_temp, path) = setup("keep = 1\n[drop]\nx = 1\n");

    delete(&path, "drop").unwrap();

    assert!(!get(&path, "drop").unwrap().exists());
    assert!(get(&path, "keep").unwrap().exists());
}

#[test]
fn test_get_missing_file_any_key() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    for key in ["a", "a.b", "", "x..y"] {
        let state = get(&path, key).unwrap();
        assert_eq!(state.exist, Some(false));
        assert_eq!(state.key, key);
    }
}

#[test]
fn test_get_through_scalar_is_absent() {
    let (_temp, path) = setup("a = \"scalar\"\n");
    assert!(!get(&path, "a.b").unwrap().exists());
}

#[test]
fn test_get_table_as_object() {
    let (_temp, path) = setup("[db]\nhost = \"h\"\nport = 5432\nratio = 0.5\n[db.pool]\nmax = 4\n");
    assert_eq!(
        get(&path, "db").unwrap().value,
        Some(json!({"host": "h", "port": 5432, "ratio": 0.5, "pool": {"max": 4}}))
    );
}

#[test]
fn test_set_object_round_trips() {
    let (_temp, path) = setup("");
    let value = json!({"name": "svc", "weights": [0.25, 1], "nested": {"on": false}});

    set(&path, "service", Some(&value)).unwrap();

    assert_eq!(get(&path, "service").unwrap().value, Some(value));
}

#[test]
fn test_set_preserves_unrelated_comments() {
    let (_temp, path) = setup("# top comment\n[a]\nb = 1 # inline note\n");

    set(&path, "a.c", Some(&json!(2))).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# top comment"));
    assert!(content.contains("b = 1 # inline note"));
    assert!(content.contains("c = 2"));
}

#[test]
fn test_set_into_inline_table() {
    let (_temp, path) = setup("server = { host = \"h\" }\n");

    set(&path, "server.tls.port", Some(&json!(443))).unwrap();

    assert_eq!(
        get(&path, "server").unwrap().value,
        Some(json!({"host": "h", "tls": {"port": 443}}))
    );
}

#[test]
fn test_set_replaces_table_with_scalar() {
    let (_temp, path) = setup("[a]\nb = 1\n");

    set(&path, "a", Some(&json!("flat"))).unwrap();

    assert_eq!(get(&path, "a").unwrap().value, Some(json!("flat")));
}

#[test]
fn test_empty_segment_keys() {
    let (_temp, path) = setup("");

    set(&path, "a..b", Some(&json!(1))).unwrap();

    let doc = read_doc(&path);
    assert_eq!(doc["a"][""]["b"].as_integer(), Some(1));
    assert_eq!(get(&path, "a..b").unwrap().value, Some(json!(1)));
}

#[test]
fn test_delete_keeps_emptied_implicit_parent() {
    let (_temp, path) = setup("[a.b]\nc = 1\n");

    delete(&path, "a.b").unwrap();

    assert!(get(&path, "a").unwrap().exists());
    assert_eq!(get(&path, "a").unwrap().value, Some(json!({})));
}

#[test]
fn test_delete_after_set_keeps_created_tables() {
    let (_temp, path) = setup("");

    set(&path, "a.b.c", Some(&json!(1))).unwrap();
    delete(&path, "a.b.c").unwrap();

    assert!(get(&path, "a").unwrap().exists());
    assert_eq!(get(&path, "a.b").unwrap().value, Some(json!({})));
    assert!(!get(&path, "a.b.c").unwrap().exists());
}

#[test]
fn test_delete_keeps_emptied_dotted_parent() {
    let (_temp, path) = setup("x.y.z = 1\n");

    delete(&path, "x.y.z").unwrap();

    assert!(get(&path, "x").unwrap().exists());
    assert_eq!(get(&path, "x.y").unwrap().value, Some(json!({})));
}

#[test]
fn test_non_utf8_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, b"a = \"\xff\xfe\"\n").unwrap();

    let err = get(&path, "a").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(err.exit_code().code(), 5);

    let err = set(&path, "a", Some(&json!(1))).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(fs::read(&path).unwrap(), b"a = \"\xff\xfe\"\n");
}

#[cfg(unix)]
#[test]
fn test_set_and_delete_through_symlink() {
    let temp = TempDir::new().unwrap();
    let real = temp.path().join("real.toml");
    let link = temp.path().join("link.toml");
    fs::write(&real, "a = 1\nb = 2\n").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    set(&link, "a", Some(&json!(2))).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(get(&real, "a").unwrap().value, Some(json!(2)));

    delete(&link, "b").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(!get(&real, "b").unwrap().exists());
    assert_eq!(get(&link, "a").unwrap().value, Some(json!(2)));
}
