//! Database models for enrollment links.

use crate::types::{FormationId, InscriptionId, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct InscriptionCreateDBRequest {
    pub student_id: StudentId,
    pub formation_id: FormationId,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InscriptionDBResponse {
    pub id: InscriptionId,
    pub student_id: StudentId,
    pub formation_id: FormationId,
    pub created_at: DateTime<Utc>,
}
