use std::time::Duration;

use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use engine::{DEFAULT_CATEGORY, Engine, EngineError};
use migration::MigratorTrait;

async fn engine_with_user(username: &str) -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build().await.unwrap();
    engine
        .register(username, "password", username)
        .await
        .unwrap();
    (engine, db)
}

#[tokio::test]
async fn add_and_list_newest_first() {
    let (engine, _db) = engine_with_user("alice").await;

    engine
        .add_expense("alice", "groceries", 42.0, Some("food"))
        .await
        .unwrap();
    // Keep creation timestamps apart so the ordering is unambiguous.
    tokio::time::sleep(Duration::from_millis(5)).await;
    engine
        .add_expense("alice", "bus ticket", 2.5, Some("transport"))
        .await
        .unwrap();

    let expenses = engine.expenses("alice").await.unwrap();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].description, "bus ticket");
    assert_eq!(expenses[1].description, "groceries");
}

#[tokio::test]
async fn missing_category_defaults_to_other() {
    let (engine, _db) = engine_with_user("alice").await;

    let expense = engine
        .add_expense("alice", "mystery", 10.0, None)
        .await
        .unwrap();
    assert_eq!(expense.category, DEFAULT_CATEGORY);

    let expense = engine
        .add_expense("alice", "mystery", 10.0, Some("  "))
        .await
        .unwrap();
    assert_eq!(expense.category, DEFAULT_CATEGORY);
}

#[tokio::test]
async fn rejects_invalid_expenses() {
    let (engine, _db) = engine_with_user("alice").await;

    let err = engine
        .add_expense("alice", "", 10.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    let err = engine
        .add_expense("alice", "negative", -1.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    assert!(engine.expenses("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_own_expense() {
    let (engine, _db) = engine_with_user("alice").await;

    let expense = engine
        .add_expense("alice", "groceries", 42.0, Some("food"))
        .await
        .unwrap();

    engine.remove_expense("alice", expense.id).await.unwrap();
    assert!(engine.expenses("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn foreign_and_missing_deletes_are_silent_noops() {
    let (engine, _db) = engine_with_user("alice").await;
    engine.register("bob", "password", "Bob").await.unwrap();

    let expense = engine
        .add_expense("alice", "groceries", 42.0, Some("food"))
        .await
        .unwrap();

    // Bob cannot delete Alice's record, and learns nothing from trying.
    engine.remove_expense("bob", expense.id).await.unwrap();
    assert_eq!(engine.expenses("alice").await.unwrap().len(), 1);

    // Unknown ids succeed too.
    engine
        .remove_expense("alice", Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(engine.expenses("alice").await.unwrap().len(), 1);
}

#[tokio::test]
async fn stats_reduce_the_user_expenses() {
    let (engine, _db) = engine_with_user("alice").await;
    engine.register("bob", "password", "Bob").await.unwrap();

    engine
        .add_expense("alice", "lunch", 100.0, Some("food"))
        .await
        .unwrap();
    engine
        .add_expense("alice", "dinner", 200.0, Some("food"))
        .await
        .unwrap();
    engine
        .add_expense("alice", "bus", 50.0, Some("transport"))
        .await
        .unwrap();
    // Another user's expense must not leak into Alice's stats.
    engine
        .add_expense("bob", "cinema", 999.0, Some("fun"))
        .await
        .unwrap();

    let stats = engine.stats("alice").await.unwrap();
    assert_eq!(stats.total, 350.0);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.by_category.get("food"), Some(&300.0));
    assert_eq!(stats.by_category.get("transport"), Some(&50.0));
    assert_eq!(stats.by_category.len(), 2);

    assert_eq!(stats.last7_days.len(), 7);
    let window_sum: f64 = stats.last7_days.values().sum();
    assert_eq!(window_sum, 350.0);

    assert_eq!(stats.by_month.len(), 1);
    assert_eq!(stats.by_month.values().sum::<f64>(), 350.0);
}
