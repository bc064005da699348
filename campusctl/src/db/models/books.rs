//! Database models for scraped book recommendations.

use crate::types::BookId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq)]
pub struct BookCreateDBRequest {
    pub title: String,
    pub price: f64,
    pub category: String,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookDBResponse {
    pub id: BookId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}
