//! Currículo web service
//!
//! Users register, enter their personal data, education, experience and
//! skills, and get a résumé page they can restyle. Handlers delegate to the
//! services in [`services`], which sit on the generic repositories in
//! [`repositories`] over the shared SQLite pool from `common`.

pub mod config;
pub mod customization;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openai;
pub mod render;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod validation;
pub mod views;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
