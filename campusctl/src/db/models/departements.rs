//! Database models for departments.

use crate::types::DepartementId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct DepartementCreateDBRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartementDBResponse {
    pub id: DepartementId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
