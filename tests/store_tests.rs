//! Store-level tests for the admin credential operations, below the HTTP
//! surface.

use vitrine::db::Store;

async fn spawn_store() -> Store {
    // In-memory SQLite is per-connection; keep the pool at one.
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to open in-memory store")
}

#[tokio::test]
async fn test_find_by_username_is_case_sensitive() {
    let store = spawn_store().await;

    let admin = store
        .find_admin_by_username("admin")
        .await
        .unwrap()
        .expect("seeded admin missing");
    assert_eq!(admin.username, "admin");
    assert_eq!(admin.credential_version, 1);

    assert!(store.find_admin_by_username("Admin").await.unwrap().is_none());
    assert!(store.find_admin_by_username("ADMIN").await.unwrap().is_none());
}

#[tokio::test]
async fn test_verify_password_hides_which_half_failed() {
    let store = spawn_store().await;

    assert!(
        store
            .verify_admin_password("admin", "admin123")
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        store
            .verify_admin_password("admin", "wrong")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        store
            .verify_admin_password("nobody", "admin123")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_replace_credentials_missing_id_is_none() {
    let store = spawn_store().await;

    let result = store
        .replace_admin_credentials(9999, "whoever", "$argon2id$fake")
        .await
        .unwrap();
    assert!(result.is_none());

    // The seeded identity is untouched
    let admin = store.find_admin_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.credential_version, 1);
}

#[tokio::test]
async fn test_replace_credentials_bumps_version_and_timestamp() {
    let store = spawn_store().await;

    let before = store.find_admin_by_username("admin").await.unwrap().unwrap();

    let hash = tokio::task::spawn_blocking(|| {
        vitrine::db::repositories::admin::hash_password("newpass1", None).unwrap()
    })
    .await
    .unwrap();

    let updated = store
        .replace_admin_credentials(before.id, "admin2", &hash)
        .await
        .unwrap()
        .expect("admin row vanished");

    assert_eq!(updated.id, before.id);
    assert_eq!(updated.username, "admin2");
    assert_eq!(updated.credential_version, before.credential_version + 1);
    assert_ne!(updated.updated_at, before.updated_at);

    // Old username no longer resolves; both halves were replaced together
    assert!(store.find_admin_by_username("admin").await.unwrap().is_none());
    assert!(
        store
            .verify_admin_password("admin2", "newpass1")
            .await
            .unwrap()
            .is_some()
    );
}
