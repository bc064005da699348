//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx over SQLite. It
//! follows the Repository pattern to provide clean abstractions over database
//! operations.
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! # Repository Pattern
//!
//! The [`handlers`] module provides one repository per table. Repositories
//! encapsulate all database access for a specific entity type and wrap a
//! `&mut SqliteConnection`, so they compose with both pooled connections and
//! transactions:
//!
//! ```ignore
//! let mut conn = pool.acquire().await?;
//! let mut repo = Students::new(&mut conn);
//! let student = repo.get_by_id(42).await?;
//! ```
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/`
//! directory. The [`crate::migrator`] function provides access to the
//! migrator:
//!
//! ```ignore
//! campusctl::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
