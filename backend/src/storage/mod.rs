//! # Storage Module
//!
//! Handles all data persistence for the pet shop application.
//!
//! The store is a single local SQLite file with two tables, `users` and
//! `animals`, accessed through `sqlx`. The domain layer only sees the
//! [`UserStorage`] and [`AnimalStorage`] traits; the repositories in
//! `repositories/` are the SQLite implementations.
//!
//! There is exactly one connection per process. It is created explicitly at
//! startup ([`DbConnection::open`]), handed to the repositories, and closed
//! at shutdown.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{AnimalRepository, UserRepository};
pub use traits::{AnimalStorage, UserStorage};
