//! Database models for course offerings.

use crate::types::{DepartementId, FormationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct FormationCreateDBRequest {
    pub title: String,
    pub description: String,
    pub departement_id: DepartementId,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FormationDBResponse {
    pub id: FormationId,
    pub title: String,
    pub description: String,
    pub departement_id: DepartementId,
    pub created_at: DateTime<Utc>,
}
