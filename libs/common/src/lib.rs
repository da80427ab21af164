//! Common library for the Currículo application
//!
//! This crate provides shared functionality used by the web service,
//! including database connectivity, schema migrations and error handling.
//!
//! ```rust,no_run
//! use common::database::{Database, DatabaseConfig, health_check};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = Database::instance(&config).await?;
//!     health_check(pool).await?;
//!     println!("Database is reachable");
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
