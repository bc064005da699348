//! HTTP request handlers for all API endpoints.
//!
//! This module contains Axum route handlers organized by resource type.
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Business logic execution via database repositories
//! - Response serialization
//!
//! # Handler Modules
//!
//! - [`departements`]: department creation and listing
//! - [`formations`]: course offering creation and listing
//! - [`students`]: student creation, lookup, and enrolled formations
//! - [`auth`]: the password-check login endpoint
//! - [`inscriptions`]: enrollment links
//! - [`books`]: catalogue scraping, recommendations, and summaries
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`] which automatically converts to
//! the appropriate HTTP status code with a user-safe message.

pub mod auth;
pub mod books;
pub mod departements;
pub mod formations;
pub mod inscriptions;
pub mod students;
