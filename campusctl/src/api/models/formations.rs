//! API request/response models for course offerings.

use crate::db::models::formations::FormationDBResponse;
use crate::types::{DepartementId, FormationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormationCreate {
    pub title: String,
    pub description: String,
    pub departement_id: DepartementId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormationResponse {
    pub id: FormationId,
    pub title: String,
    pub description: String,
    pub departement_id: DepartementId,
    pub created_at: DateTime<Utc>,
}

impl From<FormationDBResponse> for FormationResponse {
    fn from(db: FormationDBResponse) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            departement_id: db.departement_id,
            created_at: db.created_at,
        }
    }
}
