//! Database module: models and schema for the exercise store.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring an exercise row
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: pooled access to the `Numericalmethod` table

pub mod models;
pub mod schema;
pub mod store;

pub use models::ExerciseRecord;
pub use schema::SQLITE_INIT;
pub use store::{ExercisePool, ExerciseStore};
