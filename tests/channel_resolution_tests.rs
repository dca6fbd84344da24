#![allow(clippy::unwrap_used)]

use alert_bot::database::connection::DatabaseManager;
use alert_bot::database::models::{Channel, ChannelRole};
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> (DatabaseManager, TempDir) {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.to_string_lossy());

    let db = DatabaseManager::new(&db_url).await.unwrap();
    db.run_migrations().await.unwrap();
    (db, dir)
}

async fn seed_defaults(db: &DatabaseManager) {
    Channel::seed(&db.pool, "bot-commands", "test-channel-1", "test-channel-2")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_seed_creates_three_unresolved_roles() {
    let (db, _temp_dir) = setup_test_db().await;
    seed_defaults(&db).await;

    for (role, name) in [
        (ChannelRole::Input, "bot-commands"),
        (ChannelRole::Alert, "test-channel-1"),
        (ChannelRole::Review, "test-channel-2"),
    ] {
        let channel = Channel::find(&db.pool, role).await.unwrap().unwrap();
        assert_eq!(channel.name, name);
        assert_eq!(channel.chat_id, None);
    }

    assert!(!Channel::all_resolved(&db.pool).await.unwrap());
}

#[tokio::test]
async fn test_resolve_matching_fills_only_matching_role() {
    let (db, _temp_dir) = setup_test_db().await;
    seed_defaults(&db).await;

    Channel::resolve_matching(&db.pool, -100123, &["test-channel-1"])
        .await
        .unwrap();

    let alert = Channel::find(&db.pool, ChannelRole::Alert).await.unwrap().unwrap();
    assert_eq!(alert.chat_id, Some(-100123));

    let input = Channel::find(&db.pool, ChannelRole::Input).await.unwrap().unwrap();
    assert_eq!(input.chat_id, None);
}

#[tokio::test]
async fn test_resolution_completes_across_messages() {
    let (db, _temp_dir) = setup_test_db().await;
    seed_defaults(&db).await;

    Channel::resolve_matching(&db.pool, -1, &["bot-commands"]).await.unwrap();
    Channel::resolve_matching(&db.pool, -2, &["test-channel-1"]).await.unwrap();
    assert!(!Channel::all_resolved(&db.pool).await.unwrap());

    Channel::resolve_matching(&db.pool, -3, &["test-channel-2"]).await.unwrap();
    assert!(Channel::all_resolved(&db.pool).await.unwrap());
}

#[tokio::test]
async fn test_resolved_role_is_not_overwritten() {
    let (db, _temp_dir) = setup_test_db().await;
    seed_defaults(&db).await;

    Channel::resolve_matching(&db.pool, -1, &["bot-commands"]).await.unwrap();
    // A later message from a different chat with the same title must not
    // steal the role
    Channel::resolve_matching(&db.pool, -99, &["bot-commands"]).await.unwrap();

    let input = Channel::find(&db.pool, ChannelRole::Input).await.unwrap().unwrap();
    assert_eq!(input.chat_id, Some(-1));
}

#[tokio::test]
async fn test_unrelated_labels_resolve_nothing() {
    let (db, _temp_dir) = setup_test_db().await;
    seed_defaults(&db).await;

    Channel::resolve_matching(&db.pool, -5, &["random-group"]).await.unwrap();
    Channel::resolve_matching(&db.pool, -6, &[]).await.unwrap();

    assert!(!Channel::all_resolved(&db.pool).await.unwrap());
}

#[tokio::test]
async fn test_reseed_clears_stale_handles() {
    let (db, _temp_dir) = setup_test_db().await;
    seed_defaults(&db).await;

    Channel::resolve_matching(&db.pool, -1, &["bot-commands"]).await.unwrap();
    seed_defaults(&db).await;

    let input = Channel::find(&db.pool, ChannelRole::Input).await.unwrap().unwrap();
    assert_eq!(input.chat_id, None);
}
