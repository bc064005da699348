//! API request/response models.
//!
//! These are the wire-facing DTOs. Each response type converts from the
//! corresponding `db::models` record; notably, [`students::StudentResponse`]
//! drops the password hash on the way out.

pub mod auth;
pub mod books;
pub mod departements;
pub mod formations;
pub mod inscriptions;
pub mod students;
