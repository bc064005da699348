//! Database record structures.
//!
//! Each entity has a `*CreateDBRequest` (what a repository needs to insert a
//! row) and a `*DBResponse` (the row as read back). API-facing DTOs live in
//! [`crate::api::models`] and convert from these.

pub mod books;
pub mod departements;
pub mod formations;
pub mod inscriptions;
pub mod students;
