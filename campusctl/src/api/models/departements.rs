//! API request/response models for departments.

use crate::db::models::departements::DepartementDBResponse;
use crate::types::DepartementId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartementCreate {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartementResponse {
    pub id: DepartementId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DepartementDBResponse> for DepartementResponse {
    fn from(db: DepartementDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
        }
    }
}
