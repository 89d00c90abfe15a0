//! # firequote
//!
//! Lead-capture backend for a fire protection services company. The core of
//! the service is the quote-request submission path: validate the form
//! input, label it with a generated request number, persist it, and return a
//! structured success/failure result to the caller.
//!
//! ## Project layout
//!
//! ```text
//! src/
//! ├── lib.rs          # library entry point
//! ├── main.rs         # binary entry point
//! ├── config/         # environment configuration
//! ├── error/          # error types and HTTP mapping
//! ├── database/       # pool + repositories
//! ├── models/         # entities and DTOs
//! ├── services/       # business logic
//! ├── api/            # routing, middleware, handlers
//! └── utils/          # request-number generation, shared helpers
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use firequote::{config::Config, database::Database};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let db = Database::connect(&config.database_url).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Common re-exports
pub use config::Config;
pub use database::Database;
pub use error::{AppError, Result};
