// Integration tests for the CSV record store

use glossary::store::{AddOutcome, StoreError, WordList, DEFAULT_HEADER};
use std::fs;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn test_missing_file_uses_default_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let list = WordList::open(&path).expect("Missing file should load");

    assert!(list.is_empty());
    assert_eq!(list.header(), DEFAULT_HEADER);
    assert!(!path.exists(), "Loading must not create the file");
}

#[test]
fn test_empty_file_uses_default_header() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "");

    let list = WordList::open(&path).unwrap();

    assert!(list.is_empty());
    assert_eq!(list.header(), DEFAULT_HEADER);
}

#[test]
fn test_load_keeps_header_and_skips_blank_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "term,meaning,kind,extra\n\
         borrow,take a reference,rust\n\
         \"  \",ignored,x\n\
         ,also ignored,x\n\
         lifetime,scope of a reference,rust,more,columns\n\
         solo\n",
    );

    let list = WordList::open(&path).unwrap();

    assert_eq!(list.header(), ["term", "meaning", "kind", "extra"]);
    assert_eq!(list.len(), 3);
    assert_eq!(
        list.get("borrow"),
        Some(&["take a reference".to_string(), "rust".to_string()][..])
    );
    assert_eq!(list.get("lifetime").map(|v| v.len()), Some(4));
    assert_eq!(list.get("solo"), Some(&[] as &[String]));
}

#[test]
fn test_duplicate_keys_keep_first_position_and_last_values() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "w,d,g\na,1,x\nb,2,y\na,3,z\n");

    let list = WordList::open(&path).unwrap();

    let words: Vec<&str> = list.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["a", "b"]);
    assert_eq!(list.get("a"), Some(&["3".to_string(), "z".to_string()][..]));
}

#[test]
fn test_keys_are_stored_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "w,d,g\n\" padded \",d,g\n");

    let list = WordList::open(&path).unwrap();

    assert!(list.contains(" padded "));
    assert!(!list.contains("padded"));
}

#[test]
fn test_add_creates_file_with_default_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.csv");

    let mut list = WordList::open(&path).unwrap();
    let outcome = list.add("crate", "compilation unit", "rust").unwrap();

    assert_eq!(outcome, AddOutcome::Inserted { index: 0 });
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "単語,説明,ジャンル\r\ncrate,compilation unit,rust\r\n"
    );
}

#[test]
fn test_add_replaces_existing_word_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "w,d,g\na,1,x\nb,2,y\n");

    let mut list = WordList::open(&path).unwrap();
    let outcome = list.add("a", "new", "z").unwrap();

    assert_eq!(outcome, AddOutcome::Replaced { index: 0 });
    let reloaded = WordList::open(&path).unwrap();
    let words: Vec<&str> = reloaded.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["a", "b"]);
    assert_eq!(
        reloaded.get("a"),
        Some(&["new".to_string(), "z".to_string()][..])
    );
}

#[test]
fn test_add_rejects_blank_word() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.csv");

    let mut list = WordList::open(&path).unwrap();
    let result = list.add("   ", "d", "g");

    assert!(matches!(result, Err(StoreError::EmptyWord)));
    assert!(list.is_empty());
    assert!(!path.exists(), "A rejected add must not touch the file");
}

#[test]
fn test_save_round_trips_quoted_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quoted.csv");

    let mut list = WordList::open(&path).unwrap();
    list.add("comma, word", "has \"quotes\"", "line\nbreak").unwrap();

    let reloaded = WordList::open(&path).unwrap();
    assert_eq!(
        reloaded.get("comma, word"),
        Some(&["has \"quotes\"".to_string(), "line\nbreak".to_string()][..])
    );
}

#[test]
fn test_save_preserves_ragged_rows_and_custom_header() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "only\nlong,a,b,c,d\n");

    let mut list = WordList::open(&path).unwrap();
    list.add("short", "x", "y").unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "only\r\nlong,a,b,c,d\r\nshort,x,y\r\n");
}

#[test]
fn test_reload_discards_unsaved_state() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "w,d,g\na,1,x\n");

    let mut list = WordList::open(&path).unwrap();
    fs::write(&path, "w,d,g\nb,2,y\n").unwrap();
    list.load().unwrap();

    assert!(!list.contains("a"));
    assert!(list.contains("b"));
    assert_eq!(list.position("b"), Some(0));
}

#[test]
fn test_invalid_utf8_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.csv");
    fs::write(&path, b"w,d,g\ncaf\xe9,x,y\n").unwrap();

    let result = WordList::open(&path);

    assert!(matches!(result, Err(StoreError::Csv { .. })));
}

#[test]
fn test_to_text_joins_with_comma_space() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "w,d,g\na,1,x\nb,2\n");

    let list = WordList::open(&path).unwrap();

    assert_eq!(list.to_text(), "w, d, g\na, 1, x\nb, 2");
}

#[test]
fn test_failed_reload_keeps_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "w,d,g\na,1,x\nb,2,y\n");

    let mut list = WordList::open(&path).unwrap();
    let broken: &[u8] = b"w,d,g\na,1,x\nc,caf\xe9,z\nd,4,w\n";
    fs::write(&path, broken).unwrap();

    let result = list.load();

    assert!(matches!(result, Err(StoreError::Csv { .. })));
    let words: Vec<&str> = list.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["a", "b"], "Store must keep its last good state");
    assert_eq!(list.header(), ["w", "d", "g"]);
    assert_eq!(fs::read(&path).unwrap(), broken, "A failed read must not touch the file");
}

#[test]
fn test_failed_save_rolls_back_insert() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("input.csv");

    let mut list = WordList::open(&path).unwrap();
    let result = list.add("w", "d", "g");

    assert!(matches!(result, Err(StoreError::Io { .. })));
    assert!(list.is_empty());
    assert!(!list.contains("w"));
    assert_eq!(list.position("w"), None);
}

#[test]
fn test_failed_save_restores_replaced_values() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let path = sub.join("input.csv");
    fs::write(&path, "w,d,g\na,1,x\nb,2,y\n").unwrap();

    let mut list = WordList::open(&path).unwrap();
    fs::remove_dir_all(&sub).unwrap();

    assert!(list.add("a", "new", "z").is_err());
    assert_eq!(list.len(), 2);
    assert_eq!(list.get("a"), Some(&["1".to_string(), "x".to_string()][..]));
    assert_eq!(list.position("a"), Some(0));

    // A later successful insert still lands after the rolled-back state
    fs::create_dir(&sub).unwrap();
    assert_eq!(
        list.add("c", "3", "z").unwrap(),
        AddOutcome::Inserted { index: 2 }
    );
}
