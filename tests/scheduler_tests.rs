#![allow(clippy::unwrap_used)]

use alert_bot::database::connection::DatabaseManager;
use alert_bot::database::models::{Alert, Channel};
use alert_bot::services::scheduler::{check_due_alerts, format_broadcast, is_due};
use chrono_tz::Tz;
use tempfile::{tempdir, TempDir};
use teloxide::Bot;

async fn setup_test_db() -> (DatabaseManager, TempDir) {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.to_string_lossy());

    let db = DatabaseManager::new(&db_url).await.unwrap();
    db.run_migrations().await.unwrap();
    (db, dir)
}

fn test_tz() -> Tz {
    "US/Central".parse().unwrap()
}

#[test]
fn test_past_date_is_due_regardless_of_time() {
    assert!(is_due("02-10-2021", "16:00", "02-11-2021", "00:00"));
    assert!(is_due("02-10-2021", "23:59", "02-11-2021", "00:00"));
}

#[test]
fn test_same_date_fires_once_time_reached() {
    assert!(is_due("02-10-2021", "16:00", "02-10-2021", "16:00"));
    assert!(is_due("02-10-2021", "16:00", "02-10-2021", "16:01"));
    assert!(!is_due("02-10-2021", "16:00", "02-10-2021", "15:59"));
}

#[test]
fn test_future_date_is_not_due() {
    assert!(!is_due("02-12-2021", "00:00", "02-11-2021", "23:59"));
}

#[test]
fn test_comparison_is_textual_not_chronological() {
    // mm-dd-yyyy strings order by month first, so a 2021 February date
    // string-compares below a 2020 December date. The queue keeps the
    // original's literal comparison; this pins the behavior down.
    assert!(is_due("02-10-2021", "12:00", "12-01-2020", "00:00"));
    assert!(!is_due("12-01-2020", "12:00", "02-10-2021", "23:59"));
}

#[test]
fn test_malformed_text_never_fires_on_normal_days() {
    // A non-numeric date sorts above every mm-dd-yyyy string, so the record
    // strands in the queue instead of crashing the tick
    assert!(!is_due("Feb 10th", "16:00", "12-31-2099", "23:59"));
}

#[test]
fn test_broadcast_block_contains_all_fields() {
    let alert = Alert {
        id: "abc".to_string(),
        author: "Jarrod".to_string(),
        subject: "Final Exam".to_string(),
        description: ".".to_string(),
        date: "02-10-2021".to_string(),
        time: "16:00".to_string(),
        created_at: "2021-02-01T00:00:00+00:00".to_string(),
    };

    let block = format_broadcast(&alert);
    assert!(block.contains("*AUTHOR:* Jarrod"));
    assert!(block.contains("*SUBJECT:* Final Exam"));
    assert!(block.contains("*DESCRIPTION:* \\."));
    assert!(block.contains("02\\-10\\-2021"));
    assert!(block.contains("16:00"));
}

#[tokio::test]
async fn test_tick_on_empty_queue_is_noop() {
    let (db, _temp_dir) = setup_test_db().await;
    let bot = Bot::new("123456:TEST");

    // Never errors and never touches the network
    check_due_alerts(&bot, &db, test_tz()).await.unwrap();
    assert_eq!(Alert::count(&db.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_due_alert_with_unresolved_channel_stays_queued() {
    let (db, _temp_dir) = setup_test_db().await;
    let bot = Bot::new("123456:TEST");

    Channel::seed(&db.pool, "bot-commands", "alerts", "review").await.unwrap();
    Alert::enqueue(&db.pool, "A", "overdue", ".", "01-01-2000", "00:00")
        .await
        .unwrap();

    // The alert channel has no chat id yet, so the tick must not pop
    check_due_alerts(&bot, &db, test_tz()).await.unwrap();
    assert_eq!(Alert::count(&db.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_future_alert_head_is_left_untouched() {
    let (db, _temp_dir) = setup_test_db().await;
    let bot = Bot::new("123456:TEST");

    Channel::seed(&db.pool, "bot-commands", "alerts", "review").await.unwrap();
    let head = Alert::enqueue(&db.pool, "A", "later", ".", "12-31-2099", "23:59")
        .await
        .unwrap();

    check_due_alerts(&bot, &db, test_tz()).await.unwrap();

    let still_head = Alert::peek_oldest(&db.pool).await.unwrap().unwrap();
    assert_eq!(still_head.id, head.id);
}
