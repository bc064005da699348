//! API request/response models for enrollment links.

use crate::db::models::inscriptions::InscriptionDBResponse;
use crate::types::{FormationId, InscriptionId, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InscriptionCreate {
    pub student_id: StudentId,
    pub formation_id: FormationId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InscriptionResponse {
    pub id: InscriptionId,
    pub student_id: StudentId,
    pub formation_id: FormationId,
    pub created_at: DateTime<Utc>,
}

impl From<InscriptionDBResponse> for InscriptionResponse {
    fn from(db: InscriptionDBResponse) -> Self {
        Self {
            id: db.id,
            student_id: db.student_id,
            formation_id: db.formation_id,
            created_at: db.created_at,
        }
    }
}
