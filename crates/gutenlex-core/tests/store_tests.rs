// ===== gutenlex/crates/gutenlex-core/tests/store_tests.rs =====
use gutenlex_core::store::{InsertOutcome, Store};
use gutenlex_core::Error;

#[tokio::test]
async fn lookup_on_empty_store_is_none() {
    let store = Store::open_in_memory().await.unwrap();
    assert_eq!(store.lookup("Moby Dick").await.unwrap(), None);
    assert_eq!(store.lookup("").await.unwrap(), None);
}

#[tokio::test]
async fn lookup_returns_stored_blob() {
    let store = Store::open_in_memory().await.unwrap();
    store
        .insert_if_absent("Moby Dick", "whale: 7")
        .await
        .unwrap();

    assert_eq!(
        store.lookup("Moby Dick").await.unwrap(),
        Some("whale: 7".to_string())
    );
}

#[tokio::test]
async fn lookup_is_case_sensitive() {
    let store = Store::open_in_memory().await.unwrap();
    store
        .insert_if_absent("Moby Dick", "whale: 7")
        .await
        .unwrap();

    assert_eq!(store.lookup("moby dick").await.unwrap(), None);
    assert_eq!(store.lookup("MOBY DICK").await.unwrap(), None);
}

#[tokio::test]
async fn insert_if_absent_is_idempotent() {
    let store = Store::open_in_memory().await.unwrap();

    let first = store.insert_if_absent("Dracula", "blood: 4").await.unwrap();
    assert_eq!(first, InsertOutcome::Inserted);

    let second = store.insert_if_absent("Dracula", "blood: 4").await.unwrap();
    assert_eq!(second, InsertOutcome::SkippedExisting);

    // Exactly one row, original blob kept.
    assert_eq!(store.list_titles().await.unwrap(), ["Dracula"]);
    assert_eq!(
        store.lookup("Dracula").await.unwrap(),
        Some("blood: 4".to_string())
    );
}

#[tokio::test]
async fn insert_if_absent_keeps_first_blob_on_duplicate() {
    let store = Store::open_in_memory().await.unwrap();
    store.insert_if_absent("Dracula", "blood: 4").await.unwrap();
    store
        .insert_if_absent("Dracula", "castle: 9")
        .await
        .unwrap();

    assert_eq!(
        store.lookup("Dracula").await.unwrap(),
        Some("blood: 4".to_string())
    );
}

#[tokio::test]
async fn insert_or_fail_rejects_duplicates_and_leaves_store_unchanged() {
    let store = Store::open_in_memory().await.unwrap();
    store.insert_or_fail("Jane Eyre", "rochester: 5").await.unwrap();

    let err = store
        .insert_or_fail("Jane Eyre", "thornfield: 2")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle(ref t) if t == "Jane Eyre"));

    assert_eq!(store.list_titles().await.unwrap(), ["Jane Eyre"]);
    assert_eq!(
        store.lookup("Jane Eyre").await.unwrap(),
        Some("rochester: 5".to_string())
    );
}

#[tokio::test]
async fn duplicate_check_crosses_both_insert_paths() {
    let store = Store::open_in_memory().await.unwrap();
    store
        .insert_if_absent("Frankenstein", "monster: 8")
        .await
        .unwrap();

    let err = store
        .insert_or_fail("Frankenstein", "creature: 3")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle(_)));
}

#[tokio::test]
async fn list_titles_returns_every_inserted_title() {
    let store = Store::open_in_memory().await.unwrap();
    assert!(store.list_titles().await.unwrap().is_empty());

    store.insert_if_absent("Dracula", "a: 1").await.unwrap();
    store.insert_if_absent("Moby Dick", "b: 2").await.unwrap();
    store.insert_or_fail("Jane Eyre", "c: 3").await.unwrap();

    assert_eq!(
        store.list_titles().await.unwrap(),
        ["Dracula", "Moby Dick", "Jane Eyre"]
    );
}

#[tokio::test]
async fn on_disk_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.db");

    {
        let store = Store::open(&path).await.unwrap();
        store.insert_if_absent("Dracula", "blood: 4").await.unwrap();
    }

    let store = Store::open(&path).await.unwrap();
    assert_eq!(
        store.lookup("Dracula").await.unwrap(),
        Some("blood: 4".to_string())
    );
}

#[tokio::test]
async fn reopening_does_not_clobber_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.db");

    let store = Store::open(&path).await.unwrap();
    store.insert_if_absent("Dracula", "blood: 4").await.unwrap();
    drop(store);

    // Schema application is CREATE TABLE IF NOT EXISTS.
    let store = Store::open(&path).await.unwrap();
    assert_eq!(store.list_titles().await.unwrap(), ["Dracula"]);
}
