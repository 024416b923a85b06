//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Thin translation layer between Diesel rows and domain types; no
//! lifecycle rules live here. Row structs and the schema definition are
//! internal details, never exposed to the domain. Connections come from a
//! `bb8` pool with async support through `diesel-async`, and every
//! database error is mapped to a domain persistence error.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
