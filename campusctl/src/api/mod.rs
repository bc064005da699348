//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! - **Departments** (`/departements`): create and list
//! - **Formations** (`/formations`): create and list course offerings
//! - **Students** (`/students`): create, list, fetch, enrolled formations
//! - **Login** (`/login`): password check, no session issued
//! - **Enrollment** (`/inscriptions`): link a student to a formation
//! - **Books** (`/scrape-books`, `/recommendations`, `/books/summary`):
//!   catalogue scraper and summarizer pipeline
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/docs` when the server is running.

pub mod handlers;
pub mod models;
