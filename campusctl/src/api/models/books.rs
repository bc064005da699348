//! API request/response models for the book recommendation pipeline.

use crate::db::models::books::BookDBResponse;
use crate::types::BookId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookDBResponse> for BookResponse {
    fn from(db: BookDBResponse) -> Self {
        Self {
            id: db.id,
            title: db.title,
            price: db.price,
            category: db.category,
            availability: db.availability,
            created_at: db.created_at,
        }
    }
}

/// Outcome of a full catalogue walk.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScrapeReport {
    /// Number of book records persisted by the bulk insert
    pub inserted: u64,
}

/// Query parameters for listing recommendations
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct RecommendationsQuery {
    /// Exact category to match
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub price_min: Option<f64>,
    /// Inclusive upper price bound
    pub price_max: Option<f64>,
}

/// Query parameters for the summary endpoint
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct BookSummaryQuery {
    /// Catalogue URL of the book page to summarize
    pub book_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookSummaryResponse {
    pub source_url: String,
    pub summary: String,
}
