//! Persistence gateway tests

use std::fs;

use lexd::{persist, Lexicon};
use tempfile::tempdir;

fn meanings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dict.txt");

    let store = Lexicon::new();
    store.insert_new("cat", meanings(&["feline", "pet"]));
    store.insert_new("rust", meanings(&["oxide", "language"]));
    store.insert_new("terse", meanings(&["brief"]));

    let written = persist::save(&path, &store).unwrap();
    assert_eq!(written, 3);

    let reloaded = Lexicon::new();
    let loaded = persist::load(&path, &reloaded).unwrap();
    assert_eq!(loaded, 3);

    // Entry order may differ; per-entry meaning order must not
    let mut before = store.entries();
    let mut after = reloaded.entries();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_load_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nonexistent.txt");

    let store = Lexicon::new();
    let loaded = persist::load(&path, &store).unwrap();
    assert_eq!(loaded, 0);
    assert!(store.is_empty());
}

#[test]
fn test_load_skips_malformed_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    fs::write(
        &path,
        "cat: feline~pet\n\
         \n\
         line without separator\n\
         : meanings but no word\n\
         dog: canine\n",
    )
    .unwrap();

    let store = Lexicon::new();
    let loaded = persist::load(&path, &store).unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(store.get("cat"), Some(meanings(&["feline", "pet"])));
    assert_eq!(store.get("dog"), Some(meanings(&["canine"])));
}

#[test]
fn test_load_trims_keys_and_meanings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    fs::write(&path, "  cat  :  feline ~ pet \n").unwrap();

    let store = Lexicon::new();
    persist::load(&path, &store).unwrap();

    assert_eq!(store.get("cat"), Some(meanings(&["feline", "pet"])));
}

#[test]
fn test_load_keeps_first_of_duplicate_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    fs::write(&path, "cat: feline\ncat: imposter\n").unwrap();

    let store = Lexicon::new();
    let loaded = persist::load(&path, &store).unwrap();

    assert_eq!(loaded, 1);
    assert_eq!(store.get("cat"), Some(meanings(&["feline"])));
}

#[test]
fn test_save_empty_store_writes_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dict.txt");

    let store = Lexicon::new();
    assert_eq!(persist::save(&path, &store).unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
