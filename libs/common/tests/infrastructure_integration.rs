//! Integration tests for the infrastructure components
//!
//! These tests verify that the SQLite database is reachable through the
//! shared handle, that the schema is applied and that the declared foreign
//! keys are enforced.

use common::database::{Database, DatabaseConfig, health_check, init_pool, migrate};
use sqlx::Row;

/// The shared handle hands out the same migrated pool on every call
#[tokio::test]
async fn test_database_singleton_returns_same_pool() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatabaseConfig::in_memory();

    let first = Database::instance(&config).await?;
    let second = Database::instance(&config).await?;
    assert!(std::ptr::eq(first, second), "Database handle is not shared");
    assert!(Database::get().is_some());

    health_check(first).await?;

    let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
        .fetch_one(second)
        .await?;
    let total: i64 = row.get("total");
    assert_eq!(total, 0, "Fresh database should have no users");

    Ok(())
}

/// Records that point at a missing user are rejected by the store
#[tokio::test]
async fn test_foreign_keys_are_enforced() -> Result<(), Box<dyn std::error::Error>> {
    let pool = init_pool(&DatabaseConfig::in_memory()).await?;
    migrate(&pool).await?;

    let orphan = sqlx::query("INSERT INTO skills (user_id, name) VALUES (42, 'Rust')")
        .execute(&pool)
        .await;
    assert!(orphan.is_err(), "Orphan skill should violate the foreign key");

    let user_id: i64 =
        sqlx::query_scalar("INSERT INTO users (email, password_hash) VALUES (?, ?) RETURNING id")
            .bind("ana@example.com")
            .bind("hash")
            .fetch_one(&pool)
            .await?;

    sqlx::query("INSERT INTO skills (user_id, name) VALUES (?, 'Rust')")
        .bind(user_id)
        .execute(&pool)
        .await?;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(&pool)
        .await?;

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills")
        .fetch_one(&pool)
        .await?;
    assert_eq!(remaining, 0, "Skills should cascade with their user");

    Ok(())
}
