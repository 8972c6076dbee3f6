use std::fs;
use std::path::PathBuf;

use appdock::{AppRecord, AppStore, StoreError};
use tempfile::tempdir;

fn record(name: &str) -> AppRecord {
    AppRecord {
        name: name.to_string(),
        directory: format!("/srv/{name}"),
        command: format!("run-{name}"),
    }
}

fn store_in(dir: &std::path::Path) -> AppStore {
    AppStore::new(dir.join("apps.json"))
}

#[test]
fn missing_file_yields_empty_list_and_creates_the_file() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let records = store.load().unwrap();
    assert!(records.is_empty());
    assert!(store.path().exists());
    assert_eq!(fs::read_to_string(store.path()).unwrap().trim(), "[]");
}

#[test]
fn empty_file_yields_empty_list() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(store.path(), "").unwrap();

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips_in_order() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let records = vec![record("web"), record("api"), record("worker")];

    store.save(&records).unwrap();
    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn saved_file_is_pretty_printed() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    store.save(&[record("web")]).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("  \"name\": \"web\""));
    assert!(content.ends_with('\n'));
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(store.path(), "not json").unwrap();

    assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
}

#[test]
fn load_rejects_non_array_top_level() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(store.path(), r#"{"name": "web"}"#).unwrap();

    assert!(matches!(store.load(), Err(StoreError::NotAnArray)));
}

#[test]
fn load_names_the_index_of_a_record_missing_a_field() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(
        store.path(),
        r#"[
            {"name": "web", "directory": "/srv/web", "command": "npm start"},
            {"name": "api", "directory": "/srv/api"}
        ]"#,
    )
    .unwrap();

    assert!(matches!(store.load(), Err(StoreError::InvalidRecord(1))));
}

#[test]
fn load_rejects_empty_fields() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(
        store.path(),
        r#"[{"name": "", "directory": "/srv/web", "command": "npm start"}]"#,
    )
    .unwrap();

    assert!(matches!(store.load(), Err(StoreError::InvalidRecord(0))));
}

#[test]
fn add_appends_and_persists() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let records = store.add(&[], record("web")).unwrap();
    let records = store.add(&records, record("api")).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "api");
    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn add_rejects_duplicate_name_without_mutation() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let records = store.add(&[], record("web")).unwrap();

    let err = store.add(&records, record("web")).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName(ref name) if name == "web"));
    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn duplicate_check_is_case_sensitive() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let records = store.add(&[], record("web")).unwrap();

    let records = store.add(&records, record("Web")).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn remove_drops_the_first_full_equality_match() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let records = vec![record("web"), record("api"), record("worker")];
    store.save(&records).unwrap();

    let next = store.remove(&records, &record("api")).unwrap();
    assert_eq!(next, vec![record("web"), record("worker")]);
    assert_eq!(store.load().unwrap(), next);
}

#[test]
fn remove_of_absent_record_is_a_noop() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let records = vec![record("web")];
    store.save(&records).unwrap();

    let next = store.remove(&records, &record("ghost")).unwrap();
    assert_eq!(next, records);
}

#[test]
fn remove_from_empty_store_is_a_noop() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    assert!(store.remove(&[], &record("web")).unwrap().is_empty());
}

#[test]
fn add_then_remove_restores_prior_state() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let original = vec![record("web"), record("api")];
    store.save(&original).unwrap();

    let grown = store.add(&original, record("worker")).unwrap();
    let restored = store.remove(&grown, &record("worker")).unwrap();
    assert_eq!(restored, original);
    assert_eq!(store.load().unwrap(), original);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let nested: PathBuf = dir.path().join("deep").join("nested").join("apps.json");
    let store = AppStore::new(nested);

    store.save(&[record("web")]).unwrap();
    assert_eq!(store.load().unwrap(), vec![record("web")]);
}
