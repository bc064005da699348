//! Common type definitions.
//!
//! Entity identifiers are SQLite row ids wrapped in type aliases for better
//! type safety at API boundaries:
//!
//! - [`DepartementId`]: department identifier
//! - [`FormationId`]: course offering identifier
//! - [`StudentId`]: student identifier
//! - [`InscriptionId`]: enrollment link identifier
//! - [`BookId`]: recommended book identifier

// Type aliases for IDs
pub type DepartementId = i64;
pub type FormationId = i64;
pub type StudentId = i64;
pub type InscriptionId = i64;
pub type BookId = i64;
