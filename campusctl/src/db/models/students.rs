//! Database models for students.

use crate::types::{DepartementId, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct StudentCreateDBRequest {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password_hash: String,
    pub departement_id: DepartementId,
}

/// Full student row, password hash included. Handlers must convert to
/// [`crate::api::models::students::StudentResponse`] before serializing
/// anything outward.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentDBResponse {
    pub id: StudentId,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password_hash: String,
    pub departement_id: DepartementId,
    pub created_at: DateTime<Utc>,
}
