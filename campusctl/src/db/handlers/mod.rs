//! Repository implementations for database access.
//!
//! This module provides repository structs for each table in the system.
//! Each repository:
//! - Wraps a SQLx connection (or transaction, via `Acquire`)
//! - Provides strongly-typed operations
//! - Handles query construction and parameter binding
//! - Returns records from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`Departements`]: department rows
//! - [`Formations`]: course offerings
//! - [`Students`]: student accounts, including email lookup for login
//! - [`Inscriptions`]: student/formation enrollment links
//! - [`Books`]: scraped book recommendations
//!
//! The [`Repository`] trait defines the operations shared by every
//! repository; the entity lifecycle here is create/read only, so the trait
//! carries no update or delete.

pub mod books;
pub mod departements;
pub mod formations;
pub mod inscriptions;
pub mod repository;
pub mod students;

pub use books::Books;
pub use departements::Departements;
pub use formations::Formations;
pub use inscriptions::Inscriptions;
pub use repository::Repository;
pub use students::Students;
