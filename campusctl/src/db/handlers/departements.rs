//! Database repository for departments.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::departements::{DepartementCreateDBRequest, DepartementDBResponse},
    },
    types::DepartementId,
};
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Departements<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Departements<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Departements<'c> {
    type CreateRequest = DepartementCreateDBRequest;
    type Response = DepartementDBResponse;
    type Id = DepartementId;
    type Filter = ();

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let departement = sqlx::query_as::<_, DepartementDBResponse>(
            "INSERT INTO departements (name) VALUES ($1) RETURNING *",
        )
        .bind(&request.name)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(departement)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let departement =
            sqlx::query_as::<_, DepartementDBResponse>("SELECT * FROM departements WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(departement)
    }

    #[instrument(skip_all, err)]
    async fn list(&mut self, _filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let departements =
            sqlx::query_as::<_, DepartementDBResponse>("SELECT * FROM departements")
                .fetch_all(&mut *self.db)
                .await?;

        Ok(departements)
    }
}
