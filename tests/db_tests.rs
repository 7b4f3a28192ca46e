use portcullis::db::{NewUser, SqliteStore, StoreProvider, UserStore};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: format!("$argon2id$fake-hash-for-{}", username),
        role_name: "user".to_string(),
    }
}

#[tokio::test]
async fn test_add_returns_generated_id() {
    let store = SqliteStore::new_memory().await.expect("memory store");

    let created = store.add(new_user("anna")).await.expect("insert");

    assert_eq!(created.id, 1);
    assert_eq!(created.username, "anna");
    assert_eq!(created.role_name, "user");
    assert!(created.created_at > 0);
}

#[tokio::test]
async fn test_ids_increment() {
    let store = SqliteStore::new_memory().await.expect("memory store");

    let first = store.add(new_user("one")).await.expect("insert");
    let second = store.add(new_user("two")).await.expect("insert");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_find_by_username() {
    let store = SqliteStore::new_memory().await.expect("memory store");

    store.add(new_user("anna")).await.expect("insert");

    let found = store
        .find_by_username("anna")
        .await
        .expect("query")
        .expect("record exists");
    assert_eq!(found.username, "anna");
    assert_eq!(found.password_hash, "$argon2id$fake-hash-for-anna");

    let missing = store.find_by_username("nobody").await.expect("query");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_on_empty_store() {
    let store = SqliteStore::new_memory().await.expect("memory store");

    let missing = store.find_by_username("anyone").await.expect("query");

    assert!(missing.is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let store = SqliteStore::new_memory().await.expect("memory store");

    store.add(new_user("anna")).await.expect("first insert");
    let result = store.add(new_user("anna")).await;

    assert!(result.is_err(), "UNIQUE constraint should reject duplicate");
}

#[tokio::test]
async fn test_list_ordered_by_id() {
    let store = SqliteStore::new_memory().await.expect("memory store");

    store.add(new_user("zeta")).await.expect("insert");
    store.add(new_user("alpha")).await.expect("insert");

    let users = store.list().await.expect("list");

    assert_eq!(users.len(), 2);
    // Insertion order, not lexicographic
    assert_eq!(users[0].username, "zeta");
    assert_eq!(users[1].username, "alpha");
}

#[tokio::test]
async fn test_list_empty() {
    let store = SqliteStore::new_memory().await.expect("memory store");

    let users = store.list().await.expect("list");

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_provider_from_url() {
    assert!(matches!(
        StoreProvider::from_url(":memory:"),
        StoreProvider::Memory
    ));
    assert!(matches!(
        StoreProvider::from_url("./data/users.db"),
        StoreProvider::Sqlite { .. }
    ));
}

#[tokio::test]
async fn test_file_backed_store_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir
        .path()
        .join("users.db")
        .to_string_lossy()
        .into_owned();

    {
        let store = SqliteStore::new_file(&path).await.expect("file store");
        store.add(new_user("anna")).await.expect("insert");
    }

    // Reopen the same file; the record survives
    let store = SqliteStore::new_file(&path).await.expect("reopen");
    let found = store
        .find_by_username("anna")
        .await
        .expect("query")
        .expect("record persisted");
    assert_eq!(found.username, "anna");
}
