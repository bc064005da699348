//! API request/response models for students.

use crate::db::models::students::StudentDBResponse;
use crate::types::{DepartementId, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentCreate {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password: String,
    pub departement_id: DepartementId,
}

/// Student as returned to API clients. The stored password hash never
/// crosses this boundary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: StudentId,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub departement_id: DepartementId,
    pub created_at: DateTime<Utc>,
}

impl From<StudentDBResponse> for StudentResponse {
    fn from(db: StudentDBResponse) -> Self {
        Self {
            id: db.id,
            nom: db.nom,
            prenom: db.prenom,
            email: db.email,
            departement_id: db.departement_id,
            created_at: db.created_at,
        }
    }
}
