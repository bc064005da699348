//! Database repository for scraped book recommendations.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::books::{BookCreateDBRequest, BookDBResponse},
    },
    types::BookId,
};
use sqlx::{Connection, QueryBuilder, Sqlite, SqliteConnection};
use tracing::instrument;

/// SQLite caps bind variables per statement; 4 columns per row keeps this
/// chunk size well under the limit.
const BULK_INSERT_CHUNK: usize = 500;

/// Filter for listing recommended books
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

pub struct Books<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Books<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Persist a scraped batch in a single transaction.
    ///
    /// The scraper buffers a whole catalogue walk before calling this, so
    /// either every record lands or none do.
    #[instrument(skip(self, records), fields(count = records.len()), err)]
    pub async fn insert_many(&mut self, records: &[BookCreateDBRequest]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut inserted = 0u64;
        let mut tx = self.db.begin().await?;

        for chunk in records.chunks(BULK_INSERT_CHUNK) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO recommended_books (title, price, category, availability) ",
            );
            builder.push_values(chunk, |mut row, book| {
                row.push_bind(&book.title)
                    .push_bind(book.price)
                    .push_bind(&book.category)
                    .push_bind(&book.availability);
            });
            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Books<'c> {
    type CreateRequest = BookCreateDBRequest;
    type Response = BookDBResponse;
    type Id = BookId;
    type Filter = BookFilter;

    #[instrument(skip(self, request), fields(title = %request.title), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let book = sqlx::query_as::<_, BookDBResponse>(
            "INSERT INTO recommended_books (title, price, category, availability)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&request.title)
        .bind(request.price)
        .bind(&request.category)
        .bind(&request.availability)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(book)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let book =
            sqlx::query_as::<_, BookDBResponse>("SELECT * FROM recommended_books WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(book)
    }

    /// List books with optional category equality and inclusive price bounds.
    /// No ORDER BY: insertion order is the documented default.
    #[instrument(skip(self, filter), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT * FROM recommended_books WHERE 1 = 1");

        if let Some(category) = &filter.category {
            builder.push(" AND category = ").push_bind(category);
        }
        if let Some(price_min) = filter.price_min {
            builder.push(" AND price >= ").push_bind(price_min);
        }
        if let Some(price_max) = filter.price_max {
            builder.push(" AND price <= ").push_bind(price_max);
        }

        let books = builder
            .build_query_as::<BookDBResponse>()
            .fetch_all(&mut *self.db)
            .await?;

        Ok(books)
    }
}
