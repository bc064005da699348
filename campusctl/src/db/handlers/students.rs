//! Database repository for students.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::students::{StudentCreateDBRequest, StudentDBResponse},
    },
    types::StudentId,
};
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Students<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Students<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Look up a student by email. Used by the duplicate-email check on
    /// creation and by login.
    #[instrument(skip(self, email), err)]
    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<StudentDBResponse>> {
        let student =
            sqlx::query_as::<_, StudentDBResponse>("SELECT * FROM students WHERE email = $1")
                .bind(email)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(student)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Students<'c> {
    type CreateRequest = StudentCreateDBRequest;
    type Response = StudentDBResponse;
    type Id = StudentId;
    type Filter = ();

    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let student = sqlx::query_as::<_, StudentDBResponse>(
            "INSERT INTO students (nom, prenom, email, password_hash, departement_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&request.nom)
        .bind(&request.prenom)
        .bind(&request.email)
        .bind(&request.password_hash)
        .bind(request.departement_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let student =
            sqlx::query_as::<_, StudentDBResponse>("SELECT * FROM students WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(student)
    }

    #[instrument(skip_all, err)]
    async fn list(&mut self, _filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let students = sqlx::query_as::<_, StudentDBResponse>("SELECT * FROM students")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(students)
    }
}
