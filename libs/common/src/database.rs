//! Database module for handling SQLite connections and operations
//!
//! This module provides connection pooling, configuration, schema migrations,
//! health checks and the process-wide database handle.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};
use std::{env, str::FromStr, time::Duration};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

static INSTANCE: OnceCell<SqlitePool> = OnceCell::const_new();

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection acquire timeout in seconds
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: SQLite connection URL (default: "sqlite://curriculo.sqlite3")
    /// - `DATABASE_MAX_CONNECTIONS`: Maximum number of connections (default: 5)
    /// - `DATABASE_CONNECTION_TIMEOUT`: Acquire timeout in seconds (default: 30)
    pub fn from_env() -> DatabaseResult<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://curriculo.sqlite3".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let connection_timeout = env::var("DATABASE_CONNECTION_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        if max_connections == 0 {
            return Err(DatabaseError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            max_connections,
            connection_timeout,
        })
    }

    /// Configuration for a private in-memory database, used by tests
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 30,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

/// Initialize a SQLite connection pool
///
/// The database file is created when it does not exist yet and foreign key
/// enforcement is switched on for every connection.
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<SqlitePool>` - SQLite connection pool or error
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    info!("Initializing database connection pool");

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| DatabaseError::Configuration(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout));

    if config.is_in_memory() {
        // Each connection to :memory: is a separate database, so pin a single one.
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connection)?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn migrate(pool: &SqlitePool) -> DatabaseResult<()> {
    MIGRATOR.run(pool).await.map_err(DatabaseError::Migration)?;
    info!("Database schema is up to date");
    Ok(())
}

/// Check database connectivity
///
/// # Arguments
///
/// * `pool` - SQLite connection pool
///
/// # Returns
///
/// * `DatabaseResult<()>` - `DatabaseError::Query` when the database does not answer
pub async fn health_check(pool: &SqlitePool) -> DatabaseResult<()> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(|e| {
            error!("Database health check failed: {}", e);
            DatabaseError::Query(e)
        })?;

    Ok(())
}

/// Process-wide database handle
///
/// The pool is created and migrated on first use; every later call returns
/// the same pool regardless of the configuration passed in.
pub struct Database;

impl Database {
    /// Get the shared pool, creating and migrating it on first call
    pub async fn instance(config: &DatabaseConfig) -> DatabaseResult<&'static SqlitePool> {
        INSTANCE
            .get_or_try_init(|| async {
                let pool = init_pool(config).await?;
                migrate(&pool).await?;
                Ok(pool)
            })
            .await
    }

    /// Get the shared pool if it has already been created
    pub fn get() -> Option<&'static SqlitePool> {
        INSTANCE.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_database_config_from_env() {
        unsafe {
            std::env::remove_var("DATABASE_URL");
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
            std::env::remove_var("DATABASE_CONNECTION_TIMEOUT");
        }

        let config = DatabaseConfig::from_env().expect("Failed to create database config");
        assert_eq!(config.database_url, "sqlite://curriculo.sqlite3");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.connection_timeout, 30);
    }

    #[test]
    #[serial]
    fn test_database_config_from_env_with_custom_values() {
        unsafe {
            std::env::set_var("DATABASE_URL", "sqlite://test.sqlite3");
            std::env::set_var("DATABASE_MAX_CONNECTIONS", "2");
            std::env::set_var("DATABASE_CONNECTION_TIMEOUT", "5");
        }

        let config = DatabaseConfig::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite://test.sqlite3");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.connection_timeout, 5);

        unsafe {
            std::env::remove_var("DATABASE_URL");
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
            std::env::remove_var("DATABASE_CONNECTION_TIMEOUT");
        }
    }

    #[test]
    #[serial]
    fn test_database_config_rejects_zero_connections() {
        unsafe {
            std::env::set_var("DATABASE_MAX_CONNECTIONS", "0");
        }

        let result = DatabaseConfig::from_env();
        assert!(matches!(result, Err(DatabaseError::Configuration(_))));

        unsafe {
            std::env::remove_var("DATABASE_MAX_CONNECTIONS");
        }
    }

    #[tokio::test]
    async fn test_in_memory_pool_migrates_and_answers() -> anyhow::Result<()> {
        let pool = init_pool(&DatabaseConfig::in_memory()).await?;
        migrate(&pool).await?;
        health_check(&pool).await?;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name NOT LIKE '_sqlx%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await?;
        assert_eq!(
            tables,
            vec!["education", "experience", "personal_data", "skills", "users"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_health_check_reports_closed_pool() -> anyhow::Result<()> {
        let pool = init_pool(&DatabaseConfig::in_memory()).await?;
        health_check(&pool).await?;

        pool.close().await;
        assert!(matches!(
            health_check(&pool).await,
            Err(DatabaseError::Query(_))
        ));
        Ok(())
    }
}
