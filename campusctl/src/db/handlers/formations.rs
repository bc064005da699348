//! Database repository for course offerings.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::formations::{FormationCreateDBRequest, FormationDBResponse},
    },
    types::FormationId,
};
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Formations<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Formations<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Formations<'c> {
    type CreateRequest = FormationCreateDBRequest;
    type Response = FormationDBResponse;
    type Id = FormationId;
    type Filter = ();

    #[instrument(skip(self, request), fields(title = %request.title), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let formation = sqlx::query_as::<_, FormationDBResponse>(
            "INSERT INTO formations (title, description, departement_id)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.departement_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(formation)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let formation =
            sqlx::query_as::<_, FormationDBResponse>("SELECT * FROM formations WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(formation)
    }

    #[instrument(skip_all, err)]
    async fn list(&mut self, _filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let formations = sqlx::query_as::<_, FormationDBResponse>("SELECT * FROM formations")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(formations)
    }
}
